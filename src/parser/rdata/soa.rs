use crate::{ByteCursor, Name, ParserError};
use std::fmt;

/// Start of a zone of authority.
///
/// All five timers are mandatory and nothing may follow them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub mname: Name,
    pub rname: Name,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

impl Record {
    pub fn parse(cursor: &mut ByteCursor<'_>, _rdlength: u16) -> Result<Self, ParserError> {
        Ok(Self {
            mname: cursor.read_domain_name()?,
            rname: cursor.read_domain_name()?,
            serial: cursor.read_u32()?,
            refresh: cursor.read_u32()?,
            retry: cursor.read_u32()?,
            expire: cursor.read_u32()?,
            minimum: cursor.read_u32()?,
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname, self.rname, self.serial, self.refresh, self.retry, self.expire, self.minimum
        )
    }
}
