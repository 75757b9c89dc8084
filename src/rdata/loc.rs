//! LOC (RFC 1876): geographic location. Fields are kept in their raw
//! encoded form (size/precision as power-of-ten exponents, coordinates as
//! the 1000km-offset u32 the protocol defines); converting to degrees is a
//! presentation-layer concern for a renderer built on top of this crate.

use std::fmt;

use dns_derive::DnsStruct;

use crate::buffer::Buffer;
use crate::error::DNSResult;
use crate::wire::Wire;

#[derive(Debug, Clone, Default, PartialEq, Eq, DnsStruct)]
pub struct Loc {
    pub version: u8,
    pub size: u8,
    pub horiz_pre: u8,
    pub vert_pre: u8,
    pub latitude: u32,
    pub longitude: u32,
    pub altitude: u32,
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.version, self.size, self.horiz_pre, self.vert_pre, self.latitude, self.longitude, self.altitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loc_roundtrip() {
        let loc = Loc {
            version: 0,
            size: 0x12,
            horiz_pre: 0x16,
            vert_pre: 0x13,
            latitude: 2147483647,
            longitude: 2147483647,
            altitude: 10000000,
        };
        let mut buf = Buffer::new();
        loc.to_network_bytes(&mut buf).unwrap();
        let mut read = Buffer::from_bytes(buf.into_vec());
        let mut out = Loc::default();
        out.from_network_bytes(&mut read).unwrap();
        assert_eq!(out, loc);
    }
}
