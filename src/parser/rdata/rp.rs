use crate::{ByteCursor, Name, ParserError};
use std::fmt;

/// Responsible person: a mailbox and a name that has TXT records about them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub mbox: Name,
    pub txt: Name,
}

impl Record {
    pub fn parse(cursor: &mut ByteCursor<'_>, _rdlength: u16) -> Result<Self, ParserError> {
        let mbox = cursor.read_domain_name()?;
        let txt = cursor.read_domain_name()?;

        Ok(Self { mbox, txt })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mbox, self.txt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailbox_then_txt_name() {
        // "example." at 0, RDATA at 9 with both names compressed onto it
        let mut data = vec![7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 0];
        data.extend([5, b'a', b'd', b'm', b'i', b'n', 0xc0, 0]);
        data.extend([4, b'i', b'n', b'f', b'o', 0xc0, 0]);
        let mut cursor = ByteCursor::at(&data, 9).unwrap();

        let rp = Record::parse(&mut cursor, 15).unwrap();
        assert_eq!(rp.mbox.as_str(), "admin.example.");
        assert_eq!(rp.txt.as_str(), "info.example.");
        assert_eq!(rp.to_string(), "admin.example. info.example.");
        assert_eq!(cursor.position(), data.len());
    }

    #[test]
    fn root_txt_name() {
        let data = [1, b'm', 0, 0];
        let mut cursor = ByteCursor::new(&data);

        let rp = Record::parse(&mut cursor, 4).unwrap();
        assert!(rp.txt.is_root());
        assert_eq!(rp.to_string(), "m. .");
    }
}
