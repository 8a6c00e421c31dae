use crate::{ByteCursor, Header, ParserError, Question, ResourceRecord};
use serde::Deserialize;

/// What to do when a record's RDATA decodes to a different length than
/// its RDLENGTH says.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchPolicy {
    /// Fail the whole message.
    #[default]
    Abort,
    /// Keep the declared bytes as opaque data and carry on with the next
    /// record.
    Resync,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    pub fn parse(data: &[u8], on_mismatch: MismatchPolicy) -> Result<Self, ParserError> {
        let mut cursor = ByteCursor::new(data);
        let header = Header::parse(&mut cursor)?;

        let questions = (0..header.qd_count)
            .map(|_| Question::parse(&mut cursor))
            .collect::<Result<Vec<_>, _>>()?;

        let mut section = |count: u16| {
            (0..count)
                .map(|_| ResourceRecord::parse(&mut cursor, on_mismatch))
                .collect::<Result<Vec<_>, _>>()
        };

        let answers = section(header.an_count)?;
        let authorities = section(header.ns_count)?;
        let additionals = section(header.ar_count)?;

        Ok(Self {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    pub fn records(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.answers
            .iter()
            .chain(&self.authorities)
            .chain(&self.additionals)
    }
}
