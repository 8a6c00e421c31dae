use crate::{CharacterString, Name, ParserError};

/// A read position over a complete DNS message.
///
/// The cursor never owns the message. It keeps the whole buffer around so
/// that compressed names can follow pointers back to earlier offsets.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Creates a cursor resting at `position` inside `data`.
    pub fn at(data: &'a [u8], position: usize) -> Result<Self, ParserError> {
        let mut cursor = Self::new(data);
        cursor.set_position(position)?;

        Ok(cursor)
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn set_position(&mut self, position: usize) -> Result<(), ParserError> {
        if position > self.data.len() {
            return Err(ParserError::InvalidPosition {
                position: self.pos,
                delta: position as isize - self.pos as isize,
            });
        }

        self.pos = position;
        Ok(())
    }

    /// Moves the cursor by a relative offset, forwards or backwards.
    pub fn seek(&mut self, delta: isize) -> Result<(), ParserError> {
        let target = self
            .pos
            .checked_add_signed(delta)
            .filter(|&p| p <= self.data.len())
            .ok_or(ParserError::InvalidPosition {
                position: self.pos,
                delta,
            })?;

        self.pos = target;
        Ok(())
    }

    pub fn rewind(&mut self, n: usize) -> Result<(), ParserError> {
        let delta = isize::try_from(n).map_err(|_| ParserError::InvalidPosition {
            position: self.pos,
            delta: isize::MIN,
        })?;

        self.seek(-delta)
    }

    /// Steps back over the RDLENGTH field and reads it again.
    ///
    /// Only valid at the start of RDATA, where the two bytes right before
    /// the cursor are the record's RDLENGTH.
    pub fn reread_rdlength(&mut self) -> Result<u16, ParserError> {
        self.rewind(2)?;
        self.read_u16()
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], ParserError> {
        if n > self.remaining() {
            return Err(ParserError::TruncatedInput {
                needed: n,
                available: self.remaining(),
            });
        }

        let out = &self.data[self.pos..self.pos + n];
        self.pos += n;

        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, ParserError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, ParserError> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, ParserError> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_character_string(&mut self) -> Result<CharacterString, ParserError> {
        let len = self.read_u8()? as usize;
        let text = self.read_bytes(len)?;

        Ok(CharacterString::from(text))
    }

    pub fn read_domain_name(&mut self) -> Result<Name, ParserError> {
        Name::read(self)
    }
}
