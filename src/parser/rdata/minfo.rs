use crate::{ByteCursor, Name, ParserError};
use std::fmt;

/// Mailbox or mail list information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub rmailbx: Name,
    pub emailbx: Name,
}

impl Record {
    pub fn parse(cursor: &mut ByteCursor<'_>, _rdlength: u16) -> Result<Self, ParserError> {
        let rmailbx = cursor.read_domain_name()?;
        let emailbx = cursor.read_domain_name()?;

        Ok(Self { rmailbx, emailbx })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rmailbx, self.emailbx)
    }
}
