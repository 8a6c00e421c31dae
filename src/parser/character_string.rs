use crate::parser::name::write_escaped;
use std::fmt;

/// A `<character-string>`: up to 255 bytes of opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharacterString(Vec<u8>);

impl CharacterString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for CharacterString {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl fmt::Display for CharacterString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_escaped(f, &self.0, b" \"\\")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_escapes_spaces_and_quotes() {
        let s = CharacterString::from(&b"Intel \"x86\"\n"[..]);

        assert_eq!(s.len(), 12);
        assert_eq!(s.to_string(), "Intel\\ \\\"x86\\\"\\010");
    }
}
