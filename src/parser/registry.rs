//! Type code to decoder dispatch.
//!
//! The table is built on first use and is read-only afterwards.

use crate::{
    rdata::{
        a, aaaa, afsdb, domain, exchange, hinfo, https, isdn, minfo, nsec, null, placeholder, rp,
        soa, srv, txt, wks, x25,
    },
    ByteCursor, ParserError, RData, Type,
};
use log::{debug, trace};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Decodes RDATA with the cursor at its first byte.
///
/// The second argument is the declared RDLENGTH.
pub type DecodeFn = fn(&mut ByteCursor<'_>, u16) -> Result<RData, ParserError>;

static DECODERS: Lazy<HashMap<Type, DecodeFn>> = Lazy::new(|| {
    let table: [(Type, DecodeFn); 34] = [
        (Type::A, |c, l| a::Record::parse(c, l).map(RData::A)),
        (Type::NS, |c, l| domain::Record::parse(c, l).map(RData::Ns)),
        (Type::MD, |c, l| domain::Record::parse(c, l).map(RData::Md)),
        (Type::MF, |c, l| domain::Record::parse(c, l).map(RData::Mf)),
        (Type::CNAME, |c, l| domain::Record::parse(c, l).map(RData::Cname)),
        (Type::SOA, |c, l| soa::Record::parse(c, l).map(RData::Soa)),
        (Type::MB, |c, l| domain::Record::parse(c, l).map(RData::Mb)),
        (Type::MG, |c, l| domain::Record::parse(c, l).map(RData::Mg)),
        (Type::MR, |c, l| domain::Record::parse(c, l).map(RData::Mr)),
        (Type::NULL, |c, l| null::Record::parse(c, l).map(RData::Null)),
        (Type::WKS, |c, l| wks::Record::parse(c, l).map(RData::Wks)),
        (Type::PTR, |c, l| domain::Record::parse(c, l).map(RData::Ptr)),
        (Type::HINFO, |c, l| hinfo::Record::parse(c, l).map(RData::Hinfo)),
        (Type::MINFO, |c, l| minfo::Record::parse(c, l).map(RData::Minfo)),
        (Type::MX, |c, l| exchange::Record::parse(c, l).map(RData::Mx)),
        (Type::TXT, |c, l| txt::Record::parse(c, l).map(RData::Txt)),
        (Type::RP, |c, l| rp::Record::parse(c, l).map(RData::Rp)),
        (Type::AFSDB, |c, l| afsdb::Record::parse(c, l).map(RData::Afsdb)),
        (Type::X25, |c, l| x25::Record::parse(c, l).map(RData::X25)),
        (Type::ISDN, |c, l| isdn::Record::parse(c, l).map(RData::Isdn)),
        (Type::RT, |c, l| exchange::Record::parse(c, l).map(RData::Rt)),
        (Type::AAAA, |c, l| aaaa::Record::parse(c, l).map(RData::Aaaa)),
        (Type::SRV, |c, l| srv::Record::parse(c, l).map(RData::Srv)),
        (Type::KX, |c, l| exchange::Record::parse(c, l).map(RData::Kx)),
        (Type::A6, |c, l| placeholder::Record::parse(c, l).map(RData::A6)),
        (Type::DNAME, |c, l| domain::Record::parse(c, l).map(RData::Dname)),
        (Type::NSEC, |c, l| nsec::Record::parse(c, l).map(RData::Nsec)),
        (Type::HIP, |c, l| placeholder::Record::parse(c, l).map(RData::Hip)),
        (Type::HTTPS, |c, l| https::Record::parse(c, l).map(RData::Https)),
        (Type::SPF, |c, l| placeholder::Record::parse(c, l).map(RData::Spf)),
        (Type::UINFO, |c, l| placeholder::Record::parse(c, l).map(RData::Uinfo)),
        (Type::UID, |c, l| placeholder::Record::parse(c, l).map(RData::Uid)),
        (Type::GID, |c, l| placeholder::Record::parse(c, l).map(RData::Gid)),
        (Type::UNSPEC, |c, l| placeholder::Record::parse(c, l).map(RData::Unspec)),
    ];

    table.into_iter().collect()
});

fn lookup(rtype: Type) -> Option<DecodeFn> {
    DECODERS.get(&rtype).copied()
}

/// Decodes the RDATA of one record.
///
/// `position` is the offset of the first RDATA byte in `buffer`; for the
/// historic types that re-read their length the two bytes in front of it
/// must be the record's RDLENGTH. Returns the payload and the number of
/// bytes it took, which is always `rdlength` on success.
pub fn decode(
    buffer: &[u8],
    position: usize,
    rdlength: u16,
    rtype: Type,
) -> Result<(RData, usize), ParserError> {
    let mut cursor = ByteCursor::at(buffer, position)?;

    let rdata = match lookup(rtype) {
        Some(decoder) => {
            trace!("decoding {} rdata at offset {}", rtype, position);
            decoder(&mut cursor, rdlength)?
        }
        None => {
            debug!("no decoder for {}, keeping {} raw bytes", rtype, rdlength);
            RData::Unknown(rtype, raw(&mut cursor, rdlength)?)
        }
    };

    let consumed = cursor.position() - position;
    if consumed != rdlength as usize {
        return Err(ParserError::LengthMismatch {
            declared: rdlength as usize,
            consumed,
        });
    }

    Ok((rdata, consumed))
}

fn raw(cursor: &mut ByteCursor<'_>, rdlength: u16) -> Result<Vec<u8>, ParserError> {
    Ok(cursor.read_bytes(rdlength as usize)?.to_vec())
}
