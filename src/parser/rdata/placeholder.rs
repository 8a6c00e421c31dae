//! Historic and never-deployed types: A6, SPF, HIP, UINFO, UID, GID and
//! UNSPEC.
//!
//! The data is kept as is and not interpreted. These formats predate the
//! RDLENGTH convention settling down, so the length is read again from the
//! two bytes in front of RDATA rather than taken from the caller.

use crate::{ByteCursor, ParserError};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub rdata: Vec<u8>,
}

impl Record {
    pub fn parse(cursor: &mut ByteCursor<'_>, _rdlength: u16) -> Result<Self, ParserError> {
        let length = cursor.reread_rdlength()?;
        let rdata = cursor.read_bytes(length as usize)?.to_vec();

        Ok(Self { rdata })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not-used")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_rdlength_bytes() {
        let data = [0, 3, 0xde, 0xad, 0xbe, 0xef];
        let mut cursor = ByteCursor::at(&data, 2).unwrap();

        let record = Record::parse(&mut cursor, 3).unwrap();
        assert_eq!(record.rdata, vec![0xde, 0xad, 0xbe]);
        assert_eq!(record.to_string(), "not-used");
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn length_past_the_end() {
        let data = [0, 8, 0xde, 0xad];
        let mut cursor = ByteCursor::at(&data, 2).unwrap();

        assert_eq!(
            Record::parse(&mut cursor, 8),
            Err(ParserError::TruncatedInput {
                needed: 8,
                available: 2
            })
        );
    }
}
