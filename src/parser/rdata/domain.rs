//! Record data that is a single domain name.
//!
//! NS, CNAME, PTR, MB, MG, MR and DNAME all share this layout, as do the
//! obsolete MD and MF mail records. Those two are still parsed so that old
//! zone data decodes, but nothing current produces them.

use crate::{ByteCursor, Name, ParserError};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub domain_name: Name,
}

impl Record {
    pub fn parse(cursor: &mut ByteCursor<'_>, _rdlength: u16) -> Result<Self, ParserError> {
        let domain_name = cursor.read_domain_name()?;

        Ok(Self { domain_name })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.domain_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_name() {
        let data = [4, b'm', b'a', b'i', b'l', 7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 0];
        let mut cursor = ByteCursor::new(&data);

        let record = Record::parse(&mut cursor, 14).unwrap();
        assert_eq!(record.domain_name.as_str(), "mail.example.");
        assert_eq!(record.to_string(), "mail.example.");
        assert_eq!(cursor.position(), 14);
    }

    #[test]
    fn compressed_name_stops_after_pointer() {
        // "example." at 0, then "ns" + pointer and a trailing byte
        let mut data = vec![7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 0];
        data.extend([2, b'n', b's', 0xc0, 0, 0xff]);
        let mut cursor = ByteCursor::at(&data, 9).unwrap();

        let record = Record::parse(&mut cursor, 5).unwrap();
        assert_eq!(record.domain_name.as_str(), "ns.example.");
        assert_eq!(cursor.position(), 14);
    }
}
