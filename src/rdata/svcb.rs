//! SVCB / HTTPS (RFC 9460): priority, target name, and an ordered
//! SvcParamKey -> value parameter list.

use std::fmt;

use crate::buffer::Buffer;
use crate::error::{DNSError, DNSResult};
use crate::name::DomainName;
use crate::wire::Wire;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Svcb {
    pub priority: u16,
    pub target: DomainName,
    /// On-wire order is preserved for equality; a fresh `Svcb` built
    /// programmatically should insert keys in ascending numeric order, as
    /// the protocol requires, but a parsed one is accepted as-is.
    pub params: Vec<(u16, Vec<u8>)>,
}

impl fmt::Display for Svcb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.priority, self.target)?;
        for (key, value) in &self.params {
            write!(f, " key{}={}", key, hex::encode(value))?;
        }
        Ok(())
    }
}

impl Svcb {
    pub fn parse(buffer: &mut Buffer, rdlength: u16) -> DNSResult<Self> {
        let end = buffer.offset() + rdlength as usize;
        let priority = buffer.get_u16()?;
        let target = buffer.decode_name()?;
        let mut params = Vec::new();
        let mut seen = std::collections::HashSet::new();
        while buffer.offset() < end {
            let key = buffer.get_u16()?;
            let len = buffer.get_u16()? as usize;
            let value = buffer.get(len)?.to_vec();
            if !seen.insert(key) {
                return Err(DNSError::DuplicateSvcParam(key));
            }
            params.push((key, value));
        }
        Ok(Svcb {
            priority,
            target,
            params,
        })
    }

    pub fn pack(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        let mut n = buffer.put_u16(self.priority);
        n += buffer.encode_name(&self.target)?;
        for (key, value) in &self.params {
            n += buffer.put_u16(*key);
            n += buffer.put_u16(value.len() as u16);
            n += buffer.append(value);
        }
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svcb_roundtrip_preserves_param_order() {
        let svcb = Svcb {
            priority: 1,
            target: DomainName::try_from("svc.example.com.").unwrap(),
            params: vec![(1, b"h2".to_vec()), (4, vec![1, 2, 3, 4])],
        };
        let mut buf = Buffer::new();
        let n = svcb.pack(&mut buf).unwrap();
        let mut read = Buffer::from_bytes(buf.into_vec());
        let out = Svcb::parse(&mut read, n as u16).unwrap();
        assert_eq!(out, svcb);
    }

    #[test]
    fn svcb_rejects_duplicate_keys() {
        let mut buf = Buffer::new();
        buf.put_u16(1);
        buf.encode_name(&DomainName::root()).unwrap();
        let body_start = buf.offset();
        buf.put_u16(1);
        buf.put_u16(1);
        buf.put_u8(0);
        buf.put_u16(1);
        buf.put_u16(1);
        buf.put_u8(1);
        let rdlength = (buf.offset() - body_start) as u16 + 3; // + priority(2) + root name(1)
        let mut read = Buffer::from_bytes(buf.into_vec());
        assert!(Svcb::parse(&mut read, rdlength).is_err());
    }
}
