//! SRV and NAPTR.

use std::fmt;

use dns_derive::DnsStruct;

use crate::buffer::Buffer;
use crate::char_string::CharacterString;
use crate::error::DNSResult;
use crate::name::DomainName;
use crate::wire::Wire;

#[derive(Debug, Clone, Default, PartialEq, Eq, DnsStruct)]
pub struct Srv {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: DomainName,
}

impl fmt::Display for Srv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.priority, self.weight, self.port, self.target)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, DnsStruct)]
pub struct Naptr {
    pub order: u16,
    pub preference: u16,
    pub flags: CharacterString,
    pub services: CharacterString,
    pub regexp: CharacterString,
    pub replacement: DomainName,
}

impl fmt::Display for Naptr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.order, self.preference, self.flags, self.services, self.regexp, self.replacement
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srv_roundtrip() {
        let srv = Srv {
            priority: 10,
            weight: 20,
            port: 5060,
            target: DomainName::try_from("sip.example.com.").unwrap(),
        };
        let mut buf = Buffer::new();
        srv.to_network_bytes(&mut buf).unwrap();
        let mut read = Buffer::from_bytes(buf.into_vec());
        let mut out = Srv::default();
        out.from_network_bytes(&mut read).unwrap();
        assert_eq!(out, srv);
    }

    #[test]
    fn naptr_roundtrip() {
        let naptr = Naptr {
            order: 100,
            preference: 10,
            flags: CharacterString::from("u"),
            services: CharacterString::from("E2U+sip"),
            regexp: CharacterString::from("!^.*$!sip:info@example.com!"),
            replacement: DomainName::root(),
        };
        let mut buf = Buffer::new();
        naptr.to_network_bytes(&mut buf).unwrap();
        let mut read = Buffer::from_bytes(buf.into_vec());
        let mut out = Naptr::default();
        out.from_network_bytes(&mut read).unwrap();
        assert_eq!(out, naptr);
    }
}
