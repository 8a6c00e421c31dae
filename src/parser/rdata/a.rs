use crate::{ByteCursor, ParserError};
use std::{fmt, net::Ipv4Addr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub address: Ipv4Addr,
}

impl Record {
    pub fn parse(cursor: &mut ByteCursor<'_>, _rdlength: u16) -> Result<Self, ParserError> {
        let b = cursor.read_bytes(4)?;
        let address = Ipv4Addr::from([b[0], b[1], b[2], b[3]]);

        Ok(Self { address })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}
