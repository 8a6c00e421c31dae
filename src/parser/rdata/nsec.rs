use crate::{ByteCursor, Name, ParserError, Type};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub next_domain: Name,
    pub type_bitmap: Vec<u8>,
}

impl Record {
    pub fn parse(cursor: &mut ByteCursor<'_>, rdlength: u16) -> Result<Self, ParserError> {
        let end = cursor.position() + rdlength as usize;

        let next_domain = cursor.read_domain_name()?;
        let bitmap_len = end.saturating_sub(cursor.position());
        let type_bitmap = cursor.read_bytes(bitmap_len)?.to_vec();

        Ok(Self {
            next_domain,
            type_bitmap,
        })
    }

    /// Types listed in the bitmap, in ascending order.
    ///
    /// Decoding stops at the first window block that does not fit.
    pub fn types(&self) -> Vec<Type> {
        let mut out = vec![];
        let mut data = &self.type_bitmap[..];

        while data.len() >= 2 {
            let window = data[0] as usize;
            let len = data[1] as usize;
            let Some(bits) = data.get(2..2 + len) else {
                break;
            };

            for (i, byte) in bits.iter().enumerate() {
                for bit in 0..8usize {
                    if byte & (0x80u8 >> bit) == 0 {
                        continue;
                    }
                    if let Ok(code) = u16::try_from(window * 256 + i * 8 + bit) {
                        out.push(Type::from(code));
                    }
                }
            }

            data = &data[2 + len..];
        }

        out
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.next_domain)?;
        for t in self.types() {
            write!(f, " {}", t)?;
        }

        Ok(())
    }
}
