mod character_string;
mod cursor;
mod error;
mod header;
mod message;
pub(crate) mod name;
mod question;
pub mod rdata;
pub mod registry;
mod resource_record;

pub use character_string::CharacterString;
pub use cursor::ByteCursor;
pub use error::ParserError;
pub use header::Header;
pub use message::{Message, MismatchPolicy};
pub use name::{Name, MAX_NAME_LEN};
pub use question::Question;
pub use rdata::RData;
pub use resource_record::{ResourceRecord, Type};
