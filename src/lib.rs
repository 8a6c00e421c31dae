//! Decoding of DNS resource records from wire format.
//!
//! The core is [`registry::decode`]: given a message buffer, the offset of
//! a record's RDATA, its RDLENGTH and its type, it returns the typed
//! [`RData`] and the number of bytes consumed. [`Message`] walks a whole
//! message on top of that.

pub mod config;
pub mod parser;

pub use config::*;
pub use parser::*;
