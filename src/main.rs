use log::{error, info};
use rrdecode::{Config, Message};
use std::{fs, process::ExitCode};

fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_default();
    let config = match Config::parse(&path) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "decoding {} file(s), on length mismatch: {:?}",
        config.input.files.len(),
        config.decoder.on_length_mismatch
    );

    let mut failed = false;

    for file in &config.input.files {
        let data = match fs::read(file) {
            Ok(data) => data,
            Err(e) => {
                error!("error in reading {}: {}", file.display(), e);
                failed = true;
                continue;
            }
        };

        match Message::parse(&data, config.decoder.on_length_mismatch) {
            Ok(message) => {
                println!(";; {} id = {}", file.display(), message.header.id);
                for record in message.records() {
                    println!("{}", record);
                }
            }
            Err(e) => {
                error!("failed to decode {}: {}", file.display(), e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
