use crate::{rdata::write_generic, ByteCursor, ParserError};
use std::fmt;

/// NULL data: anything at all, up to 65535 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub data: Vec<u8>,
}

impl Record {
    pub fn parse(cursor: &mut ByteCursor<'_>, rdlength: u16) -> Result<Self, ParserError> {
        let data = cursor.read_bytes(rdlength as usize)?.to_vec();

        Ok(Self { data })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_generic(f, &self.data)
    }
}
