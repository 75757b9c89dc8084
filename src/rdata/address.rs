//! A / AAAA: fixed-width IPv4 / IPv6 addresses.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::buffer::Buffer;
use crate::error::DNSResult;
use crate::wire::Wire;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct A(pub Ipv4Addr);

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Wire for A {
    fn to_network_bytes(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        Ok(buffer.append(&self.0.octets()))
    }

    fn from_network_bytes(&mut self, buffer: &mut Buffer) -> DNSResult<()> {
        let bytes = buffer.get(4)?;
        self.0 = Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aaaa(pub Ipv6Addr);

impl fmt::Display for Aaaa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Wire for Aaaa {
    fn to_network_bytes(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        Ok(buffer.append(&self.0.octets()))
    }

    fn from_network_bytes(&mut self, buffer: &mut Buffer) -> DNSResult<()> {
        let bytes = buffer.get(16)?;
        let octets: [u8; 16] = bytes.try_into().expect("exactly 16 bytes read");
        self.0 = Ipv6Addr::from(octets);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_record_roundtrip() {
        let a = A(Ipv4Addr::new(93, 184, 216, 34));
        let mut buf = Buffer::new();
        a.to_network_bytes(&mut buf).unwrap();
        let mut read = Buffer::from_bytes(buf.into_vec());
        let mut out = A::default();
        out.from_network_bytes(&mut read).unwrap();
        assert_eq!(out, a);
        assert_eq!(a.to_string(), "93.184.216.34");
    }

    #[test]
    fn aaaa_record_roundtrip() {
        let a = Aaaa(Ipv6Addr::LOCALHOST);
        let mut buf = Buffer::new();
        a.to_network_bytes(&mut buf).unwrap();
        let mut read = Buffer::from_bytes(buf.into_vec());
        let mut out = Aaaa::default();
        out.from_network_bytes(&mut read).unwrap();
        assert_eq!(out, a);
    }
}
