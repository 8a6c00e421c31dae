use crate::{ByteCursor, CharacterString, ParserError};
use std::fmt;

/// Host information: CPU and operating system, as two character-strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub cpu: CharacterString,
    pub os: CharacterString,
}

impl Record {
    pub fn parse(cursor: &mut ByteCursor<'_>, _rdlength: u16) -> Result<Self, ParserError> {
        let cpu = cursor.read_character_string()?;
        let os = cursor.read_character_string()?;

        Ok(Self { cpu, os })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CPU={} OS={}", self.cpu, self.os)
    }
}
