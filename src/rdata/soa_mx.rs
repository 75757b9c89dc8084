//! SOA and MX: the two fixed-layout name+integers records.

use std::fmt;

use dns_derive::DnsStruct;

use crate::buffer::Buffer;
use crate::error::DNSResult;
use crate::name::DomainName;
use crate::wire::Wire;

#[derive(Debug, Clone, Default, PartialEq, Eq, DnsStruct)]
pub struct Soa {
    pub mname: DomainName,
    pub rname: DomainName,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname, self.rname, self.serial, self.refresh, self.retry, self.expire, self.minimum
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, DnsStruct)]
pub struct Mx {
    pub preference: u16,
    pub exchange: DomainName,
}

impl fmt::Display for Mx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soa_roundtrip() {
        let soa = Soa {
            mname: DomainName::try_from("ns1.example.com.").unwrap(),
            rname: DomainName::try_from("hostmaster.example.com.").unwrap(),
            serial: 2024010100,
            refresh: 7200,
            retry: 3600,
            expire: 1209600,
            minimum: 300,
        };
        let mut buf = Buffer::new();
        soa.to_network_bytes(&mut buf).unwrap();
        let mut read = Buffer::from_bytes(buf.into_vec());
        let mut out = Soa::default();
        out.from_network_bytes(&mut read).unwrap();
        assert_eq!(out, soa);
    }

    #[test]
    fn mx_roundtrip() {
        let mx = Mx {
            preference: 10,
            exchange: DomainName::try_from("mail.example.com.").unwrap(),
        };
        let mut buf = Buffer::new();
        mx.to_network_bytes(&mut buf).unwrap();
        let mut read = Buffer::from_bytes(buf.into_vec());
        let mut out = Mx::default();
        out.from_network_bytes(&mut read).unwrap();
        assert_eq!(out, mx);
    }
}
