use crate::{ByteCursor, CharacterString, ParserError};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub strings: Vec<CharacterString>,
}

impl Record {
    /// Reads character-strings until RDLENGTH bytes are used up.
    ///
    /// There has to be at least one string, so zero RDLENGTH is an error.
    pub fn parse(cursor: &mut ByteCursor<'_>, rdlength: u16) -> Result<Self, ParserError> {
        if rdlength == 0 {
            return Err(ParserError::TruncatedInput {
                needed: 1,
                available: 0,
            });
        }

        let end = cursor.position() + rdlength as usize;
        let mut strings = vec![];

        while cursor.position() < end {
            strings.push(cursor.read_character_string()?);
        }

        Ok(Self { strings })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.strings.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "\"{}\"", s)?;
        }

        Ok(())
    }
}
