pub mod a;
pub mod aaaa;
pub mod afsdb;
pub mod domain;
pub mod exchange;
pub mod hinfo;
pub mod https;
pub mod isdn;
pub mod minfo;
pub mod nsec;
pub mod null;
pub mod placeholder;
pub mod rp;
pub mod soa;
pub mod srv;
pub mod txt;
pub mod wks;
pub mod x25;

use crate::Type;
use std::fmt;

/// Decoded RDATA, one variant per supported layout.
#[derive(Debug, Clone, PartialEq)]
pub enum RData {
    A(a::Record),
    Ns(domain::Record),
    Md(domain::Record),
    Mf(domain::Record),
    Cname(domain::Record),
    Soa(soa::Record),
    Mb(domain::Record),
    Mg(domain::Record),
    Mr(domain::Record),
    Null(null::Record),
    Wks(wks::Record),
    Ptr(domain::Record),
    Hinfo(hinfo::Record),
    Minfo(minfo::Record),
    Mx(exchange::Record),
    Txt(txt::Record),
    Rp(rp::Record),
    Afsdb(afsdb::Record),
    X25(x25::Record),
    Isdn(isdn::Record),
    Rt(exchange::Record),
    Aaaa(aaaa::Record),
    Srv(srv::Record),
    Kx(exchange::Record),
    Dname(domain::Record),
    Nsec(nsec::Record),
    Https(https::Record),

    A6(placeholder::Record),
    Spf(placeholder::Record),
    Hip(placeholder::Record),
    Uinfo(placeholder::Record),
    Uid(placeholder::Record),
    Gid(placeholder::Record),
    Unspec(placeholder::Record),

    /// Anything without a decoder, kept as the raw RDATA bytes.
    Unknown(Type, Vec<u8>),
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RData::*;

        match self {
            A(r) => write!(f, "{}", r),
            Aaaa(r) => write!(f, "{}", r),
            Ns(r) | Md(r) | Mf(r) | Cname(r) | Mb(r) | Mg(r) | Mr(r) | Ptr(r) | Dname(r) => {
                write!(f, "{}", r)
            }
            Soa(r) => write!(f, "{}", r),
            Null(r) => write!(f, "{}", r),
            Wks(r) => write!(f, "{}", r),
            Hinfo(r) => write!(f, "{}", r),
            Minfo(r) => write!(f, "{}", r),
            Mx(r) | Rt(r) | Kx(r) => write!(f, "{}", r),
            Txt(r) => write!(f, "{}", r),
            Rp(r) => write!(f, "{}", r),
            Afsdb(r) => write!(f, "{}", r),
            X25(r) => write!(f, "{}", r),
            Isdn(r) => write!(f, "{}", r),
            Srv(r) => write!(f, "{}", r),
            Nsec(r) => write!(f, "{}", r),
            Https(r) => write!(f, "{}", r),
            A6(r) | Spf(r) | Hip(r) | Uinfo(r) | Uid(r) | Gid(r) | Unspec(r) => write!(f, "{}", r),
            Unknown(_, data) => write_generic(f, data),
        }
    }
}

/// Writes bytes in the RFC 3597 generic form, `\# <len> <hex>`.
pub(crate) fn write_generic(f: &mut fmt::Formatter<'_>, data: &[u8]) -> fmt::Result {
    write!(f, "\\# {}", data.len())?;
    if !data.is_empty() {
        f.write_str(" ")?;
        for b in data {
            write!(f, "{:02x}", b)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_renders_generic() {
        assert_eq!(
            RData::Unknown(Type::from(65280), vec![0xab, 0x01]).to_string(),
            "\\# 2 ab01"
        );
        assert_eq!(RData::Unknown(Type::OPT, vec![]).to_string(), "\\# 0");
    }
}
