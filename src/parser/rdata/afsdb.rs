use crate::{ByteCursor, Name, ParserError};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub subtype: u16,
    pub hostname: Name,
}

impl Record {
    pub fn parse(cursor: &mut ByteCursor<'_>, _rdlength: u16) -> Result<Self, ParserError> {
        let subtype = cursor.read_u16()?;
        let hostname = cursor.read_domain_name()?;

        Ok(Self { subtype, hostname })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.subtype, self.hostname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtype_and_hostname() {
        let data = [0, 2, 3, b'a', b'f', b's', 4, b'c', b'e', b'l', b'l', 0];
        let mut cursor = ByteCursor::new(&data);

        let afsdb = Record::parse(&mut cursor, 12).unwrap();
        assert_eq!(afsdb.subtype, 2);
        assert_eq!(afsdb.hostname.as_str(), "afs.cell.");
        assert_eq!(afsdb.to_string(), "2 afs.cell.");
        assert_eq!(cursor.position(), 12);
    }
}
