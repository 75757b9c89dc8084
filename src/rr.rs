//! The common resource-record wrapper: name, type, class, TTL, and a
//! length-prefixed RDATA body dispatched through [`crate::rdata::RData`].

use std::fmt;

use crate::buffer::Buffer;
use crate::enums::{RClass, RecordType};
use crate::error::DNSResult;
use crate::name::DomainName;
use crate::rdata::RData;
use crate::wire::Wire;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: DomainName,
    pub rclass: RClass,
    pub ttl: i32,
    pub rdata: RData,
}

impl ResourceRecord {
    pub fn new(name: DomainName, rclass: RClass, ttl: i32, rdata: RData) -> Self {
        ResourceRecord {
            name,
            rclass,
            ttl,
            rdata,
        }
    }

    pub fn rtype(&self) -> RecordType {
        self.rdata.rtype()
    }
}

impl Wire for ResourceRecord {
    fn to_network_bytes(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        let mut n = buffer.encode_name(&self.name)?;
        n += self.rtype().to_network_bytes(buffer)?;
        n += self.rclass.to_network_bytes(buffer)?;
        n += buffer.put_i32(self.ttl);
        let rdlength_at = buffer.reserve_u16();
        n += 2;
        let body_start = buffer.offset();
        self.rdata.pack(buffer)?;
        let body_len = (buffer.offset() - body_start) as u16;
        buffer.backfill_u16(rdlength_at, body_len);
        n += body_len as usize;
        Ok(n)
    }

    fn from_network_bytes(&mut self, buffer: &mut Buffer) -> DNSResult<()> {
        self.name = buffer.decode_name()?;
        let mut rtype = RecordType::default();
        rtype.from_network_bytes(buffer)?;
        self.rclass.from_network_bytes(buffer)?;
        self.ttl = buffer.get_i32()?;
        let rdlength = buffer.get_u16()?;
        self.rdata = RData::parse(buffer, rtype, rdlength)?;
        Ok(())
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name,
            self.ttl,
            self.rclass.name().unwrap_or("CLASS?"),
            self.rtype(),
            self.rdata
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdata::A;
    use std::net::Ipv4Addr;

    fn sample() -> ResourceRecord {
        ResourceRecord::new(
            DomainName::try_from("example.com.").unwrap(),
            RClass::IN,
            300,
            RData::A(A(Ipv4Addr::new(93, 184, 216, 34))),
        )
    }

    #[test]
    fn roundtrip_via_buffer() {
        let rr = sample();
        let mut buf = Buffer::new();
        rr.to_network_bytes(&mut buf).unwrap();
        let mut read = Buffer::from_bytes(buf.into_vec());
        let mut out = ResourceRecord::new(DomainName::root(), RClass::IN, 0, RData::Unknown(vec![]));
        out.from_network_bytes(&mut read).unwrap();
        assert_eq!(out, rr);
    }

    #[test]
    fn rdlength_is_backfilled_correctly() {
        let rr = sample();
        let mut buf = Buffer::new();
        rr.to_network_bytes(&mut buf).unwrap();
        let bytes = buf.into_vec();
        // name(13) + type(2) + class(2) + ttl(4) = 21 bytes before rdlength
        let rdlength = u16::from_be_bytes([bytes[21], bytes[22]]);
        assert_eq!(rdlength, 4);
    }
}
