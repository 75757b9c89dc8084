//! The RDATA catalog: a closed, tagged union over every record type this
//! crate understands, plus an opaque fallback for anything it doesn't.
//! Grounded on the dispatch shape of `toluol-proto`'s `Rdata` enum and its
//! `match_rdata!` macro -- a dispatcher keyed on the type code, replacing
//! any inheritance hierarchy with one exhaustive match per operation.

mod address;
mod dnssec;
mod loc;
mod security;
mod soa_mx;
mod srv_naptr;
mod svcb;
mod text;

pub use address::{Aaaa, A};
pub use dnssec::{Dnskey, Ds, Nsec, Nsec3, Nsec3Param, Rrsig};
pub use loc::Loc;
pub use security::{Caa, Sshfp, Tlsa};
pub use soa_mx::{Mx, Soa};
pub use srv_naptr::{Naptr, Srv};
pub use svcb::Svcb;
pub use text::{Afsdb, Hinfo, Rp, Txt};

use std::fmt;

use crate::buffer::Buffer;
use crate::enums::RecordType;
use crate::error::{DNSError, DNSResult};
use crate::name::DomainName;
use crate::wire::Wire;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(A),
    Ns(DomainName),
    Cname(DomainName),
    Soa(Soa),
    Ptr(DomainName),
    Dname(DomainName),
    Mx(Mx),
    Hinfo(Hinfo),
    Txt(Txt),
    Rp(Rp),
    Afsdb(Afsdb),
    Aaaa(Aaaa),
    Loc(Loc),
    Srv(Srv),
    Naptr(Naptr),
    Ds(Ds),
    Sshfp(Sshfp),
    Rrsig(Rrsig),
    Nsec(Nsec),
    Dnskey(Dnskey),
    Nsec3(Nsec3),
    Nsec3Param(Nsec3Param),
    Tlsa(Tlsa),
    Smimea(Tlsa),
    Svcb(Svcb),
    Https(Svcb),
    Caa(Caa),
    /// EDNS0 option list; see [`crate::edns::Edns0`] for the reinterpreted
    /// class/TTL fields that accompany this RDATA in the wire OPT record.
    Opt(crate::edns::EdnsOptions),
    /// RFC 3597 generic/unknown-type fallback: re-packing reproduces the
    /// original bytes exactly.
    Unknown(Vec<u8>),
}

impl RData {
    pub fn rtype(&self) -> RecordType {
        match self {
            RData::A(_) => RecordType::A,
            RData::Ns(_) => RecordType::NS,
            RData::Cname(_) => RecordType::CNAME,
            RData::Soa(_) => RecordType::SOA,
            RData::Ptr(_) => RecordType::PTR,
            RData::Dname(_) => RecordType::DNAME,
            RData::Mx(_) => RecordType::MX,
            RData::Hinfo(_) => RecordType::HINFO,
            RData::Txt(_) => RecordType::TXT,
            RData::Rp(_) => RecordType::RP,
            RData::Afsdb(_) => RecordType::AFSDB,
            RData::Aaaa(_) => RecordType::AAAA,
            RData::Loc(_) => RecordType::LOC,
            RData::Srv(_) => RecordType::SRV,
            RData::Naptr(_) => RecordType::NAPTR,
            RData::Ds(_) => RecordType::DS,
            RData::Sshfp(_) => RecordType::SSHFP,
            RData::Rrsig(_) => RecordType::RRSIG,
            RData::Nsec(_) => RecordType::NSEC,
            RData::Dnskey(_) => RecordType::DNSKEY,
            RData::Nsec3(_) => RecordType::NSEC3,
            RData::Nsec3Param(_) => RecordType::NSEC3PARAM,
            RData::Tlsa(_) => RecordType::TLSA,
            RData::Smimea(_) => RecordType::SMIMEA,
            RData::Svcb(_) => RecordType::SVCB,
            RData::Https(_) => RecordType::HTTPS,
            RData::Caa(_) => RecordType::CAA,
            RData::Opt(_) => RecordType::OPT,
            RData::Unknown(_) => RecordType(0),
        }
    }

    /// Parse exactly `rdlength` bytes at the current cursor into the
    /// variant named by `rtype`. Any leftover or shortfall against
    /// `rdlength` is a [`DNSError::RDataLengthMismatch`].
    pub fn parse(buffer: &mut Buffer, rtype: RecordType, rdlength: u16) -> DNSResult<Self> {
        let start = buffer.offset();
        let rdata = match rtype {
            RecordType::A => RData::A(read_fixed(buffer)?),
            RecordType::NS => RData::Ns(buffer.decode_name()?),
            RecordType::CNAME => RData::Cname(buffer.decode_name()?),
            RecordType::SOA => RData::Soa(read_fixed(buffer)?),
            RecordType::PTR => RData::Ptr(buffer.decode_name()?),
            RecordType::DNAME => RData::Dname(buffer.decode_name()?),
            RecordType::MX => RData::Mx(read_fixed(buffer)?),
            RecordType::HINFO => RData::Hinfo(read_fixed(buffer)?),
            RecordType::TXT => RData::Txt(Txt::parse(buffer, rdlength)?),
            RecordType::RP => RData::Rp(read_fixed(buffer)?),
            RecordType::AFSDB => RData::Afsdb(read_fixed(buffer)?),
            RecordType::AAAA => RData::Aaaa(read_fixed(buffer)?),
            RecordType::LOC => RData::Loc(read_fixed(buffer)?),
            RecordType::SRV => RData::Srv(read_fixed(buffer)?),
            RecordType::NAPTR => RData::Naptr(read_fixed(buffer)?),
            RecordType::DS => RData::Ds(Ds::parse(buffer, rdlength)?),
            RecordType::SSHFP => RData::Sshfp(Sshfp::parse(buffer, rdlength)?),
            RecordType::RRSIG => RData::Rrsig(Rrsig::parse(buffer, rdlength)?),
            RecordType::NSEC => RData::Nsec(Nsec::parse(buffer, rdlength)?),
            RecordType::DNSKEY => RData::Dnskey(Dnskey::parse(buffer, rdlength)?),
            RecordType::NSEC3 => RData::Nsec3(Nsec3::parse(buffer, rdlength)?),
            RecordType::NSEC3PARAM => RData::Nsec3Param(Nsec3Param::parse(buffer, rdlength)?),
            RecordType::TLSA => RData::Tlsa(Tlsa::parse(buffer, rdlength)?),
            RecordType::SMIMEA => RData::Smimea(Tlsa::parse(buffer, rdlength)?),
            RecordType::SVCB => RData::Svcb(Svcb::parse(buffer, rdlength)?),
            RecordType::HTTPS => RData::Https(Svcb::parse(buffer, rdlength)?),
            RecordType::CAA => RData::Caa(Caa::parse(buffer, rdlength)?),
            RecordType::OPT => RData::Opt(crate::edns::parse_options(buffer, rdlength)?),
            _ => RData::Unknown(buffer.get(rdlength as usize)?.to_vec()),
        };

        let consumed = (buffer.offset() - start) as u16;
        if consumed != rdlength {
            return Err(DNSError::RDataLengthMismatch {
                rtype: rtype.0,
                declared: rdlength,
                consumed,
            });
        }
        Ok(rdata)
    }

    pub fn pack(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        match self {
            RData::A(v) => v.to_network_bytes(buffer),
            RData::Ns(v) | RData::Cname(v) | RData::Ptr(v) | RData::Dname(v) => {
                buffer.encode_name(v)
            }
            RData::Soa(v) => v.to_network_bytes(buffer),
            RData::Mx(v) => v.to_network_bytes(buffer),
            RData::Hinfo(v) => v.to_network_bytes(buffer),
            RData::Txt(v) => v.pack(buffer),
            RData::Rp(v) => v.to_network_bytes(buffer),
            RData::Afsdb(v) => v.to_network_bytes(buffer),
            RData::Aaaa(v) => v.to_network_bytes(buffer),
            RData::Loc(v) => v.to_network_bytes(buffer),
            RData::Srv(v) => v.to_network_bytes(buffer),
            RData::Naptr(v) => v.to_network_bytes(buffer),
            RData::Ds(v) => v.pack(buffer),
            RData::Sshfp(v) => v.pack(buffer),
            RData::Rrsig(v) => v.pack(buffer),
            RData::Nsec(v) => v.pack(buffer),
            RData::Dnskey(v) => v.pack(buffer),
            RData::Nsec3(v) => v.pack(buffer),
            RData::Nsec3Param(v) => v.pack(buffer),
            RData::Tlsa(v) | RData::Smimea(v) => v.pack(buffer),
            RData::Svcb(v) | RData::Https(v) => v.pack(buffer),
            RData::Caa(v) => v.pack(buffer),
            RData::Opt(opts) => crate::edns::pack_options(opts, buffer),
            RData::Unknown(bytes) => Ok(buffer.append(bytes)),
        }
    }
}

/// Helper for the variants whose layout is a fixed sequence of `Wire`
/// fields (via `#[derive(DnsStruct)]`): construct the default and read into it.
fn read_fixed<T: Wire + Default>(buffer: &mut Buffer) -> DNSResult<T> {
    let mut value = T::default();
    value.from_network_bytes(buffer)?;
    Ok(value)
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(v) => write!(f, "{v}"),
            RData::Ns(v) | RData::Cname(v) | RData::Ptr(v) | RData::Dname(v) => write!(f, "{v}"),
            RData::Soa(v) => write!(f, "{v}"),
            RData::Mx(v) => write!(f, "{v}"),
            RData::Hinfo(v) => write!(f, "{v}"),
            RData::Txt(v) => write!(f, "{v}"),
            RData::Rp(v) => write!(f, "{v}"),
            RData::Afsdb(v) => write!(f, "{v}"),
            RData::Aaaa(v) => write!(f, "{v}"),
            RData::Loc(v) => write!(f, "{v}"),
            RData::Srv(v) => write!(f, "{v}"),
            RData::Naptr(v) => write!(f, "{v}"),
            RData::Ds(v) => write!(f, "{v}"),
            RData::Sshfp(v) => write!(f, "{v}"),
            RData::Rrsig(v) => write!(f, "{v}"),
            RData::Nsec(v) => write!(f, "{v}"),
            RData::Dnskey(v) => write!(f, "{v}"),
            RData::Nsec3(v) => write!(f, "{v}"),
            RData::Nsec3Param(v) => write!(f, "{v}"),
            RData::Tlsa(v) | RData::Smimea(v) => write!(f, "{v}"),
            RData::Svcb(v) | RData::Https(v) => write!(f, "{v}"),
            RData::Caa(v) => write!(f, "{v}"),
            RData::Opt(opts) => write!(f, "OPT({} option(s))", opts.len()),
            // RFC 3597 generic-RR presentation form.
            RData::Unknown(bytes) => write!(f, "\\# {} {}", bytes.len(), hex::encode_upper(bytes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn a_record_dispatches_by_type() {
        let mut buf = Buffer::new();
        A(Ipv4Addr::new(1, 2, 3, 4)).to_network_bytes(&mut buf).unwrap();
        let mut read = Buffer::from_bytes(buf.into_vec());
        let rdata = RData::parse(&mut read, RecordType::A, 4).unwrap();
        assert_eq!(rdata, RData::A(A(Ipv4Addr::new(1, 2, 3, 4))));
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let mut buf = Buffer::new();
        A(Ipv4Addr::new(1, 2, 3, 4)).to_network_bytes(&mut buf).unwrap();
        let mut read = Buffer::from_bytes(buf.into_vec());
        assert!(RData::parse(&mut read, RecordType::A, 3).is_err());
    }

    #[test]
    fn unknown_type_roundtrips_opaque_bytes() {
        let mut buf = Buffer::new();
        buf.append(&[0xDE, 0xAD, 0xBE, 0xEF]);
        let mut read = Buffer::from_bytes(buf.into_vec());
        let rdata = RData::parse(&mut read, RecordType(65280), 4).unwrap();
        assert_eq!(rdata, RData::Unknown(vec![0xDE, 0xAD, 0xBE, 0xEF]));
        assert_eq!(rdata.to_string(), "\\# 4 DEADBEEF");

        let mut out = Buffer::new();
        rdata.pack(&mut out).unwrap();
        assert_eq!(out.into_vec(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn cname_compresses_like_any_other_name() {
        let mut buf = Buffer::new();
        let target = DomainName::try_from("example.com.").unwrap();
        buf.encode_name(&target).unwrap();
        let cname = RData::Cname(target.clone());
        let before = buf.offset();
        cname.pack(&mut buf).unwrap();
        assert_eq!(buf.offset() - before, 2); // reused as a pointer
    }
}
