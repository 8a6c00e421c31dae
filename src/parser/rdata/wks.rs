use crate::{ByteCursor, ParserError};
use std::{fmt, net::Ipv4Addr};

const FIXED_LEN: u16 = 5;

/// Well known services offered on one address over one IP protocol.
///
/// Bit `n` of the bitmap, counting from the most significant bit of the
/// first byte, stands for port `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub address: Ipv4Addr,
    pub protocol: u8,
    pub bitmap: Vec<u8>,
}

impl Record {
    /// Parses WKS data. Must be called with the cursor at the start of
    /// RDATA, directly behind the RDLENGTH field.
    pub fn parse(cursor: &mut ByteCursor<'_>, _rdlength: u16) -> Result<Self, ParserError> {
        let length = cursor.reread_rdlength()?;

        let b = cursor.read_bytes(4)?;
        let address = Ipv4Addr::new(b[0], b[1], b[2], b[3]);
        let protocol = cursor.read_u8()?;

        let bitmap_len = length
            .checked_sub(FIXED_LEN)
            .ok_or(ParserError::LengthMismatch {
                declared: length as usize,
                consumed: FIXED_LEN as usize,
            })?;
        let bitmap = cursor.read_bytes(bitmap_len as usize)?.to_vec();

        Ok(Self {
            address,
            protocol,
            bitmap,
        })
    }

    /// Ports whose bit is set in the bitmap.
    pub fn ports(&self) -> impl Iterator<Item = u16> + '_ {
        self.bitmap.iter().enumerate().flat_map(|(i, byte)| {
            (0..8u16)
                .filter(move |bit| *byte & (0x80u8 >> bit) != 0)
                .map(move |bit| i as u16 * 8 + bit)
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.address, self.protocol)
    }
}
