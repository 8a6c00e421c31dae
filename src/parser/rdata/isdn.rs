use crate::{ByteCursor, CharacterString, ParserError};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub address: CharacterString,
    pub subaddress: Option<CharacterString>,
}

impl Record {
    /// The sub-address is optional and present only if RDLENGTH leaves
    /// room for it.
    pub fn parse(cursor: &mut ByteCursor<'_>, rdlength: u16) -> Result<Self, ParserError> {
        let end = cursor.position() + rdlength as usize;

        let address = cursor.read_character_string()?;
        let subaddress = if cursor.position() < end {
            Some(cursor.read_character_string()?)
        } else {
            None
        };

        Ok(Self {
            address,
            subaddress,
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)?;
        if let Some(sa) = &self.subaddress {
            write!(f, " {}", sa)?;
        }

        Ok(())
    }
}
