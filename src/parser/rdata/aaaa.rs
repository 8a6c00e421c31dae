use crate::{ByteCursor, ParserError};
use std::{fmt, net::Ipv6Addr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub address: Ipv6Addr,
}

impl Record {
    pub fn parse(cursor: &mut ByteCursor<'_>, _rdlength: u16) -> Result<Self, ParserError> {
        let mut octets = [0u8; 16];
        octets.copy_from_slice(cursor.read_bytes(16)?);

        Ok(Self {
            address: Ipv6Addr::from(octets),
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}
