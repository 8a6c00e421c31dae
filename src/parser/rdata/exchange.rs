//! Preference plus host name, as used by KX, MX and RT.
//!
//! The three types share a wire layout and a meaning for the preference:
//! lower values are tried first. Records order by preference and then by
//! target name, ignoring ASCII case, so a list of candidates can simply be
//! sorted. Two records are equal exactly when that ordering says so.
//!
//! KX data must not use name compression on the wire. Compressed names are
//! still accepted when reading.

use crate::{ByteCursor, Name, ParserError};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

#[derive(Debug, Clone)]
pub struct Record {
    pub preference: u16,
    pub exchange: Name,
}

impl Record {
    pub fn new(preference: u16, exchange: Name) -> Self {
        Self {
            preference,
            exchange,
        }
    }

    pub fn parse(cursor: &mut ByteCursor<'_>, _rdlength: u16) -> Result<Self, ParserError> {
        let preference = cursor.read_u16()?;
        let exchange = cursor.read_domain_name()?;

        Ok(Self {
            preference,
            exchange,
        })
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.preference
            .cmp(&other.preference)
            .then_with(|| self.exchange.cmp_ignore_case(&other.exchange))
    }
}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.preference.hash(state);
        for b in self.exchange.as_str().bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}
