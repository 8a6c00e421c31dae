use crate::{ByteCursor, ParserError};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub fields: u16,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl Header {
    pub const SIZE: usize = 12;

    pub fn parse(cursor: &mut ByteCursor<'_>) -> Result<Self, ParserError> {
        if cursor.remaining() < Self::SIZE {
            return Err(ParserError::TruncatedInput {
                needed: Self::SIZE,
                available: cursor.remaining(),
            });
        }

        Ok(Header {
            id: cursor.read_u16()?,
            fields: cursor.read_u16()?,
            qd_count: cursor.read_u16()?,
            an_count: cursor.read_u16()?,
            ns_count: cursor.read_u16()?,
            ar_count: cursor.read_u16()?,
        })
    }

    pub fn qr(&self) -> bool {
        ((self.fields >> 15) & 1) == 1
    }

    pub fn opcode(&self) -> u8 {
        ((self.fields >> 11) & 0b1111) as u8
    }

    pub fn aa(&self) -> bool {
        ((self.fields >> 10) & 1) == 1
    }

    pub fn tc(&self) -> bool {
        ((self.fields >> 9) & 1) == 1
    }

    pub fn rd(&self) -> bool {
        ((self.fields >> 8) & 1) == 1
    }

    pub fn ra(&self) -> bool {
        ((self.fields >> 7) & 1) == 1
    }

    pub fn rcode(&self) -> u8 {
        (self.fields & 0b1111) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        let data = [0x12, 0x34, 0x85, 0x83, 0, 1, 0, 2, 0, 0, 0, 1];
        let mut cursor = ByteCursor::new(&data);

        let header = Header::parse(&mut cursor).unwrap();
        assert_eq!(header.id, 0x1234);
        assert!(header.qr());
        assert_eq!(header.opcode(), 0);
        assert!(header.aa());
        assert!(!header.tc());
        assert!(header.rd());
        assert!(header.ra());
        assert_eq!(header.rcode(), 3);
        assert_eq!(header.an_count, 2);
        assert_eq!(header.ar_count, 1);
    }

    #[test]
    fn short_header() {
        let data = [0u8; 11];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(
            Header::parse(&mut cursor),
            Err(ParserError::TruncatedInput {
                needed: 12,
                available: 11
            })
        );
        assert_eq!(cursor.position(), 0);
    }
}
