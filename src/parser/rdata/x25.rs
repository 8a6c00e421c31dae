use crate::{ByteCursor, CharacterString, ParserError};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub psdn_address: CharacterString,
}

impl Record {
    pub fn parse(cursor: &mut ByteCursor<'_>, _rdlength: u16) -> Result<Self, ParserError> {
        let psdn_address = cursor.read_character_string()?;

        Ok(Self { psdn_address })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.psdn_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn psdn_address() {
        let data = [9, b'3', b'1', b'1', b'0', b'6', b'1', b'7', b'0', b'0'];
        let mut cursor = ByteCursor::new(&data);

        let x25 = Record::parse(&mut cursor, 10).unwrap();
        assert_eq!(x25.psdn_address.as_bytes(), b"311061700");
        assert_eq!(x25.to_string(), "311061700");
        assert_eq!(cursor.position(), 10);
    }

    #[test]
    fn length_past_end() {
        let data = [4, b'3', b'1'];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(
            Record::parse(&mut cursor, 3),
            Err(ParserError::TruncatedInput {
                needed: 4,
                available: 2
            })
        );
    }
}
