use crate::{parser::name::write_escaped, ByteCursor, Name, ParserError};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub svc_priority: u16,
    pub target_name: Name,
    pub svc_params: Vec<SvcParam>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvcParam {
    pub key: u16,
    pub value: Vec<u8>,
}

impl Record {
    pub fn parse(cursor: &mut ByteCursor<'_>, rdlength: u16) -> Result<Self, ParserError> {
        let end = cursor.position() + rdlength as usize;

        let svc_priority = cursor.read_u16()?;
        let target_name = cursor.read_domain_name()?;

        let mut svc_params = vec![];

        while cursor.position() < end {
            let key = cursor.read_u16()?;
            let value_length = cursor.read_u16()? as usize;
            let value = cursor.read_bytes(value_length)?.to_vec();

            svc_params.push(SvcParam { key, value });
        }

        Ok(Self {
            svc_priority,
            target_name,
            svc_params,
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.svc_priority, self.target_name)?;
        for param in &self.svc_params {
            write!(f, " key{}=\"", param.key)?;
            write_escaped(f, &param.value, b"\"\\")?;
            f.write_str("\"")?;
        }

        Ok(())
    }
}
