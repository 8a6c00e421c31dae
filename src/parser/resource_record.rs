use crate::{registry, ByteCursor, MismatchPolicy, Name, ParserError, RData};
use log::{trace, warn};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRecord {
    pub name: Name,
    pub rtype: Type,
    pub class: u16,
    pub ttl: u32,
    pub rdlength: u16,
    pub rdata: RData,
}

impl ResourceRecord {
    /// Reads the envelope at the cursor and decodes the RDATA behind it.
    ///
    /// On success the cursor rests at the start of the next record.
    pub fn parse(
        cursor: &mut ByteCursor<'_>,
        on_mismatch: MismatchPolicy,
    ) -> Result<Self, ParserError> {
        let name = cursor.read_domain_name()?;
        let rtype = Type::from(cursor.read_u16()?);
        let class = cursor.read_u16()?;
        let ttl = cursor.read_u32()?;
        let rdlength = cursor.read_u16()?;

        let start = cursor.position();
        trace!(
            "record {} {} rdlength = {} at offset {}",
            name,
            rtype,
            rdlength,
            start
        );

        let rdata = match registry::decode(cursor.data(), start, rdlength, rtype) {
            Ok((rdata, _)) => {
                cursor.seek(rdlength as isize)?;
                rdata
            }

            Err(ParserError::LengthMismatch { declared, consumed })
                if on_mismatch == MismatchPolicy::Resync =>
            {
                warn!(
                    "{} {} record consumed {} of {} declared bytes, skipping to the declared end",
                    name, rtype, consumed, declared
                );

                RData::Unknown(rtype, cursor.read_bytes(rdlength as usize)?.to_vec())
            }

            Err(e) => return Err(e),
        };

        Ok(Self {
            name,
            rtype,
            class,
            ttl,
            rdlength,
            rdata,
        })
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.name, self.ttl, self.class, self.rtype, self.rdata
        )
    }
}

macro_rules! rtypes {
    ( $( $(#[$attr:meta])* ($variant:ident => $value:expr, $mnemonic:expr) )* ) => {
        /// A resource record type code.
        ///
        /// Any 16 bit value is a valid type. The named constants are the
        /// ones this crate knows a layout for, or at least a mnemonic.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct Type(u16);

        impl Type {
            $(
                $(#[$attr])*
                pub const $variant: Type = Type($value);
            )*

            pub const fn code(self) -> u16 {
                self.0
            }

            pub fn mnemonic(self) -> Option<&'static str> {
                match self {
                    $( Type::$variant => Some($mnemonic), )*
                    _ => None,
                }
            }
        }
    };
}

rtypes! {
    (A => 1, "A")
    (NS => 2, "NS")
    /// Mail destination, obsoleted by MX.
    (MD => 3, "MD")
    /// Mail forwarder, obsoleted by MX.
    (MF => 4, "MF")
    (CNAME => 5, "CNAME")
    (SOA => 6, "SOA")
    (MB => 7, "MB")
    (MG => 8, "MG")
    (MR => 9, "MR")
    (NULL => 10, "NULL")
    (WKS => 11, "WKS")
    (PTR => 12, "PTR")
    (HINFO => 13, "HINFO")
    (MINFO => 14, "MINFO")
    (MX => 15, "MX")
    (TXT => 16, "TXT")
    (RP => 17, "RP")
    (AFSDB => 18, "AFSDB")
    (X25 => 19, "X25")
    (ISDN => 20, "ISDN")
    (RT => 21, "RT")
    (AAAA => 28, "AAAA")
    (SRV => 33, "SRV")
    (KX => 36, "KX")
    /// Historic IPv6 address record.
    (A6 => 38, "A6")
    (DNAME => 39, "DNAME")
    (OPT => 41, "OPT")
    (NSEC => 47, "NSEC")
    (DHCID => 49, "DHCID")
    (HIP => 55, "HIP")
    (HTTPS => 65, "HTTPS")
    (SPF => 99, "SPF")
    (UINFO => 100, "UINFO")
    (UID => 101, "UID")
    (GID => 102, "GID")
    (UNSPEC => 103, "UNSPEC")
}

impl From<u16> for Type {
    fn from(v: u16) -> Self {
        Type(v)
    }
}

impl From<Type> for u16 {
    fn from(t: Type) -> Self {
        t.0
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(m) => f.write_str(m),
            None => write!(f, "TYPE{}", self.0),
        }
    }
}
