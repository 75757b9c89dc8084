//! EDNS0 (RFC 6891): the OPT pseudo-record. Its CLASS and TTL fields are
//! reinterpreted rather than holding an ordinary class/TTL, and its RDATA is
//! a list of `(option-code, option-data)` pairs rather than a fixed layout --
//! so it gets its own thin wrapper over [`ResourceRecord`] instead of living
//! purely inside the RDATA catalog.

use std::fmt;

use crate::buffer::Buffer;
use crate::enums::{EdnsOptionCode, RClass, RecordType};
use crate::error::{DNSError, DNSResult};
use crate::name::DomainName;
use crate::rdata::RData;
use crate::rr::ResourceRecord;
use crate::wire::Wire;

pub type EdnsOptions = Vec<(EdnsOptionCode, Vec<u8>)>;

pub(crate) fn parse_options(buffer: &mut Buffer, rdlength: u16) -> DNSResult<EdnsOptions> {
    let end = buffer.offset() + rdlength as usize;
    let mut options = Vec::new();
    while buffer.offset() < end {
        if end - buffer.offset() < 4 {
            return Err(DNSError::EdnsOptionOverflow {
                declared: rdlength,
                available: (end - buffer.offset()) as u16,
            });
        }
        let mut code = EdnsOptionCode::default();
        code.from_network_bytes(buffer)?;
        let len = buffer.get_u16()?;
        if len as usize > end - buffer.offset() {
            return Err(DNSError::EdnsOptionOverflow {
                declared: len,
                available: (end - buffer.offset()) as u16,
            });
        }
        let data = buffer.get(len as usize)?.to_vec();
        options.push((code, data));
    }
    Ok(options)
}

pub(crate) fn pack_options(options: &EdnsOptions, buffer: &mut Buffer) -> DNSResult<usize> {
    let mut n = 0;
    for (code, data) in options {
        n += code.to_network_bytes(buffer)?;
        n += buffer.put_u16(data.len() as u16);
        n += buffer.append(data);
    }
    Ok(n)
}

/// A parsed view over an OPT resource record's reinterpreted fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edns0 {
    pub udp_payload_size: u16,
    pub extended_rcode: u8,
    pub version: u8,
    pub do_flag: bool,
    pub z: u16,
    pub options: EdnsOptions,
}

impl Edns0 {
    pub fn new(udp_payload_size: u16, do_flag: bool, options: EdnsOptions) -> Self {
        Edns0 {
            udp_payload_size,
            extended_rcode: 0,
            version: 0,
            do_flag,
            z: 0,
            options,
        }
    }

    /// View an OPT-typed resource record as an `Edns0`, reinterpreting its
    /// class (UDP size) and TTL (ext-rcode/version/DO/Z) fields.
    pub fn from_rr(rr: &ResourceRecord) -> Option<Edns0> {
        let options = match &rr.rdata {
            RData::Opt(opts) => opts.clone(),
            _ => return None,
        };
        let ttl = rr.ttl as u32;
        Some(Edns0 {
            udp_payload_size: rr.rclass.0,
            extended_rcode: ((ttl >> 24) & 0xFF) as u8,
            version: ((ttl >> 16) & 0xFF) as u8,
            do_flag: (ttl >> 15) & 0x1 == 1,
            z: (ttl & 0x7FFF) as u16,
            options,
        })
    }

    /// Pack this EDNS0 view back into the OPT resource record it came from.
    pub fn to_rr(&self) -> ResourceRecord {
        let ttl = ((self.extended_rcode as u32) << 24)
            | ((self.version as u32) << 16)
            | ((self.do_flag as u32) << 15)
            | (self.z as u32 & 0x7FFF);
        ResourceRecord::new(
            DomainName::root(),
            RClass(self.udp_payload_size),
            ttl as i32,
            RData::Opt(self.options.clone()),
        )
    }
}

impl fmt::Display for Edns0 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "; EDNS: version: {}, flags:{} udp: {}",
            self.version,
            if self.do_flag { " do" } else { "" },
            self.udp_payload_size
        )
    }
}

pub const OPT_RECORD_TYPE: RecordType = RecordType::OPT;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edns_roundtrips_through_rr() {
        let edns = Edns0::new(4096, true, vec![(EdnsOptionCode::NSID, vec![1, 2, 3])]);
        let rr = edns.to_rr();
        assert_eq!(rr.rtype(), RecordType::OPT);

        let mut buf = Buffer::new();
        rr.to_network_bytes(&mut buf).unwrap();
        let mut read = Buffer::from_bytes(buf.into_vec());
        let mut parsed = ResourceRecord::new(DomainName::root(), RClass(0), 0, RData::Unknown(vec![]));
        parsed.from_network_bytes(&mut read).unwrap();

        let back = Edns0::from_rr(&parsed).unwrap();
        assert_eq!(back, edns);
    }
}
