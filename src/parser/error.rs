use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("Unexpected end of input: needed {needed} bytes, {available} available")]
    TruncatedInput { needed: usize, available: usize },

    #[error("Domain name exceeds 255 bytes ({0} bytes read)")]
    NameTooLong(usize),

    #[error("Compression pointer at offset {pointer} targets offset {target} which is not strictly earlier")]
    CompressionLoop { pointer: usize, target: usize },

    #[error("Seek by {delta} from position {position} leaves the buffer")]
    InvalidPosition { position: usize, delta: isize },

    #[error("RDATA length mismatch: declared {declared}, consumed {consumed}")]
    LengthMismatch { declared: usize, consumed: usize },

    #[error("Reserved label type in length byte {0:#04x}")]
    BadLabel(u8),
}
