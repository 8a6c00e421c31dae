use crate::{ByteCursor, Name, ParserError, Type};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub qname: Name,
    pub qtype: Type,
    pub qclass: u16,
}

impl Question {
    pub fn parse(cursor: &mut ByteCursor<'_>) -> Result<Self, ParserError> {
        let qname = cursor.read_domain_name()?;
        let qtype = Type::from(cursor.read_u16()?);
        let qclass = cursor.read_u16()?;

        Ok(Self {
            qname,
            qtype,
            qclass,
        })
    }
}
