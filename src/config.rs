use crate::MismatchPolicy;
use serde::Deserialize;
use std::{fs, io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error in reading {0}: {1}")]
    Io(String, #[source] io::Error),

    #[error("error in parsing config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub decoder: DecoderConfig,
    pub input: InputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    pub on_length_mismatch: MismatchPolicy,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Files holding one raw wire-format DNS message each.
    pub files: Vec<PathBuf>,
}

impl Config {
    const FILENAME: &'static str = "config.toml";

    pub fn parse(mut filename: &str) -> Result<Config, ConfigError> {
        if filename.is_empty() {
            filename = Config::FILENAME;
        }

        let contents =
            fs::read_to_string(filename).map_err(|e| ConfigError::Io(filename.to_string(), e))?;

        Config::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}
