use crate::{ByteCursor, ParserError};
use std::{
    cmp::Ordering,
    fmt::{self, Write},
};

pub const MAX_NAME_LEN: usize = 255;

const POINTER_MASK: u8 = 0b1100_0000;

/// A decoded, absolute domain name in presentation form.
///
/// Labels keep their original case. The text always ends in a dot and the
/// root name is a single `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Reads a possibly compressed name starting at the cursor.
    ///
    /// After a pointer the cursor rests right behind the first pointer that
    /// was followed, never behind the labels it points at. Each pointer must
    /// target an offset strictly below every offset already visited while
    /// reading this name.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self, ParserError> {
        let data = cursor.data();
        let mut offset = cursor.position();
        let mut lowest_visited = offset;
        let mut resume = None;
        let mut wire_len = 0;
        let mut out = String::new();

        loop {
            let byte = *data.get(offset).ok_or(ParserError::TruncatedInput {
                needed: 1,
                available: 0,
            })?;

            match byte & POINTER_MASK {
                0 => {
                    let len = byte as usize;

                    wire_len += len + 1;
                    if wire_len > MAX_NAME_LEN {
                        return Err(ParserError::NameTooLong(wire_len));
                    }

                    if len == 0 {
                        offset += 1;
                        break;
                    }

                    let start = offset + 1;
                    let label = data
                        .get(start..start + len)
                        .ok_or(ParserError::TruncatedInput {
                            needed: len,
                            available: data.len() - start,
                        })?;

                    // Writing into a String cannot fail.
                    let _ = write_escaped(&mut out, label, b".\\");
                    out.push('.');

                    offset = start + len;
                }

                POINTER_MASK => {
                    let low = *data.get(offset + 1).ok_or(ParserError::TruncatedInput {
                        needed: 2,
                        available: 1,
                    })?;
                    let target = (((byte & !POINTER_MASK) as usize) << 8) | low as usize;

                    if target >= lowest_visited {
                        return Err(ParserError::CompressionLoop {
                            pointer: offset,
                            target,
                        });
                    }

                    if resume.is_none() {
                        resume = Some(offset + 2);
                    }

                    lowest_visited = target;
                    offset = target;
                }

                _ => return Err(ParserError::BadLabel(byte)),
            }
        }

        cursor.set_position(resume.unwrap_or(offset))?;

        if out.is_empty() {
            out.push('.');
        }

        Ok(Self(out))
    }

    pub fn root() -> Self {
        Self(".".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "."
    }

    /// Compares two names ignoring ASCII case.
    pub fn cmp_ignore_case(&self, other: &Self) -> Ordering {
        let lhs = self.0.bytes().map(|b| b.to_ascii_lowercase());
        let rhs = other.0.bytes().map(|b| b.to_ascii_lowercase());

        lhs.cmp(rhs)
    }

    pub fn eq_ignore_case(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        if s.is_empty() || s == "." {
            return Self::root();
        }

        if s.ends_with('.') {
            Self(s.to_string())
        } else {
            Self(format!("{}.", s))
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Writes raw label or string bytes in RFC 1035 presentation form.
///
/// Printable ASCII is copied, bytes in `specials` get a backslash and
/// everything else becomes a `\DDD` decimal escape.
pub(crate) fn write_escaped<W: Write>(
    out: &mut W,
    bytes: &[u8],
    specials: &[u8],
) -> fmt::Result {
    for &b in bytes {
        if specials.contains(&b) {
            out.write_char('\\')?;
            out.write_char(b as char)?;
        } else if b.is_ascii_graphic() {
            out.write_char(b as char)?;
        } else {
            write!(out, "\\{:03}", b)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(name: &str) -> Vec<u8> {
        let mut out = vec![];
        for label in name.split('.').filter(|l| !l.is_empty()) {
            out.push(label.len() as u8);
            out.extend(label.as_bytes());
        }
        out.push(0);
        out
    }

    #[test]
    fn uncompressed_name() {
        let data = labels("www.Example.com");
        let mut cursor = ByteCursor::new(&data);

        let name = cursor.read_domain_name().unwrap();
        assert_eq!(name.as_str(), "www.Example.com.");
        assert_eq!(cursor.position(), data.len());
    }

    #[test]
    fn root_name() {
        let data = [0u8, 0xff];
        let mut cursor = ByteCursor::new(&data);

        let name = cursor.read_domain_name().unwrap();
        assert!(name.is_root());
        assert_eq!(name.to_string(), ".");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn compressed_name_matches_expanded_form() {
        // "example.com." at 0, then "mail" + pointer to 0, then a trailing byte.
        let mut data = labels("example.com");
        let second = data.len();
        data.extend([4, b'm', b'a', b'i', b'l', 0xc0, 0x00, 0xee]);

        let mut cursor = ByteCursor::at(&data, second).unwrap();
        let compressed = cursor.read_domain_name().unwrap();
        assert_eq!(cursor.position(), second + 7);
        assert_eq!(cursor.read_u8().unwrap(), 0xee);

        let expanded = labels("mail.example.com");
        let mut cursor = ByteCursor::new(&expanded);
        assert_eq!(cursor.read_domain_name().unwrap(), compressed);
    }

    #[test]
    fn chained_pointers_rest_after_first_pointer() {
        let mut data = labels("com");
        let example = data.len();
        data.extend([7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 0xc0, 0x00]);
        let start = data.len();
        data.extend([3, b'f', b't', b'p', 0xc0, example as u8]);

        let mut cursor = ByteCursor::at(&data, start).unwrap();
        let name = cursor.read_domain_name().unwrap();
        assert_eq!(name.as_str(), "ftp.example.com.");
        assert_eq!(cursor.position(), data.len());
    }

    #[test]
    fn pointer_to_itself_is_a_loop() {
        let data = [0u8, 0xc0, 0x01];
        let mut cursor = ByteCursor::at(&data, 1).unwrap();

        assert_eq!(
            cursor.read_domain_name(),
            Err(ParserError::CompressionLoop {
                pointer: 1,
                target: 1
            })
        );
    }

    #[test]
    fn forward_pointer_is_a_loop() {
        let data = [0xc0, 0x02, 0x00];
        let mut cursor = ByteCursor::new(&data);

        assert!(matches!(
            cursor.read_domain_name(),
            Err(ParserError::CompressionLoop { .. })
        ));
    }

    #[test]
    fn pointer_into_own_labels_is_a_loop() {
        let data = [1, b'a', 0xc0, 0x00];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(
            cursor.read_domain_name(),
            Err(ParserError::CompressionLoop {
                pointer: 2,
                target: 0
            })
        );
    }

    #[test]
    fn pointer_chain_that_climbs_back_up_is_a_loop() {
        // 6 -> 4 -> 0 is fine, but the label at 0 then points back up to 4.
        let data = [1, b'a', 0xc0, 0x04, 0xc0, 0x00, 0xc0, 0x04];
        let mut cursor = ByteCursor::at(&data, 6).unwrap();

        assert_eq!(
            cursor.read_domain_name(),
            Err(ParserError::CompressionLoop {
                pointer: 2,
                target: 4
            })
        );
    }

    #[test]
    fn name_too_long() {
        let mut data = vec![];
        for _ in 0..5 {
            data.push(60);
            data.extend([b'x'; 60]);
        }
        data.push(0);

        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_domain_name(), Err(ParserError::NameTooLong(305)));
    }

    #[test]
    fn longest_legal_name() {
        let mut data = vec![];
        for _ in 0..3 {
            data.push(63);
            data.extend([b'x'; 63]);
        }
        data.push(61);
        data.extend([b'y'; 61]);
        data.push(0);
        assert_eq!(data.len(), MAX_NAME_LEN);

        let mut cursor = ByteCursor::new(&data);
        assert!(cursor.read_domain_name().is_ok());
    }

    #[test]
    fn truncated_label() {
        let data = [5, b'a', b'b'];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(
            cursor.read_domain_name(),
            Err(ParserError::TruncatedInput {
                needed: 5,
                available: 2
            })
        );
    }

    #[test]
    fn missing_terminator() {
        let data = [1, b'a'];
        let mut cursor = ByteCursor::new(&data);

        assert!(matches!(
            cursor.read_domain_name(),
            Err(ParserError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn reserved_label_type() {
        let data = [0x41, 0x00];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_domain_name(), Err(ParserError::BadLabel(0x41)));
    }

    #[test]
    fn escapes_special_bytes() {
        let data = [4, b'a', b'.', b' ', 0x07, 0];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_domain_name().unwrap().as_str(), "a\\.\\032\\007.");
    }

    #[test]
    fn case_insensitive_comparison() {
        let upper = Name::from("A.EXAMPLE.");
        let lower = Name::from("a.example");

        assert_ne!(upper, lower);
        assert!(upper.eq_ignore_case(&lower));
        assert_eq!(upper.cmp_ignore_case(&lower), Ordering::Equal);
        assert_eq!(
            Name::from("a.example.").cmp_ignore_case(&Name::from("B.example.")),
            Ordering::Less
        );
    }
}
