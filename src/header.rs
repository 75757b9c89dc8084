//! The fixed 12-byte DNS header: id, flag bits, and four section counts.
//! Flag-byte layout follows RFC 1035 §4.1.1: byte 1 is
//! `QR|OPCODE(4)|AA|TC|RD`, byte 2 is `RA|Z|AD|CD|RCODE(4)`, packed and
//! unpacked via [`crate::bit`] against the unified [`Buffer`].

use std::fmt;

use crate::bit::{get_bits, set_bits};
use crate::buffer::Buffer;
use crate::enums::{OpCode, PacketType, ResponseCode};
use crate::error::DNSResult;
use crate::wire::Wire;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub qr: PacketType,
    pub opcode: OpCode,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub z: bool,
    pub ad: bool,
    pub cd: bool,
    pub rcode: ResponseCode,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Default for Header {
    fn default() -> Self {
        Header {
            id: 0,
            qr: PacketType::Query,
            opcode: OpCode::Query,
            aa: false,
            tc: false,
            rd: true,
            ra: false,
            z: false,
            ad: false,
            cd: false,
            rcode: ResponseCode::NoError,
            qdcount: 0,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }
}

fn bool_bit(b: bool) -> u16 {
    b as u16
}

impl Header {
    fn pack_flags(&self) -> u16 {
        let mut flags = 0u16;
        flags = set_bits(flags, self.qr as u16, 15, 1);
        flags = set_bits(flags, self.opcode as u16, 11, 4);
        flags = set_bits(flags, bool_bit(self.aa), 10, 1);
        flags = set_bits(flags, bool_bit(self.tc), 9, 1);
        flags = set_bits(flags, bool_bit(self.rd), 8, 1);
        flags = set_bits(flags, bool_bit(self.ra), 7, 1);
        flags = set_bits(flags, bool_bit(self.z), 6, 1);
        flags = set_bits(flags, bool_bit(self.ad), 5, 1);
        flags = set_bits(flags, bool_bit(self.cd), 4, 1);
        flags = set_bits(flags, self.rcode as u16, 0, 4);
        flags
    }

    fn unpack_flags(&mut self, flags: u16) -> DNSResult<()> {
        use crate::error::DNSError;
        self.qr = PacketType::try_from(get_bits(flags, 15, 1)).map_err(DNSError::InvalidHeaderField)?;
        self.opcode = OpCode::try_from(get_bits(flags, 11, 4)).map_err(DNSError::InvalidHeaderField)?;
        self.aa = get_bits(flags, 10, 1) == 1;
        self.tc = get_bits(flags, 9, 1) == 1;
        self.rd = get_bits(flags, 8, 1) == 1;
        self.ra = get_bits(flags, 7, 1) == 1;
        self.z = get_bits(flags, 6, 1) == 1;
        self.ad = get_bits(flags, 5, 1) == 1;
        self.cd = get_bits(flags, 4, 1) == 1;
        self.rcode = ResponseCode::try_from(get_bits(flags, 0, 4)).map_err(DNSError::InvalidHeaderField)?;
        Ok(())
    }
}

impl Wire for Header {
    fn to_network_bytes(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        let mut n = buffer.put_u16(self.id);
        n += buffer.put_u16(self.pack_flags());
        n += buffer.put_u16(self.qdcount);
        n += buffer.put_u16(self.ancount);
        n += buffer.put_u16(self.nscount);
        n += buffer.put_u16(self.arcount);
        Ok(n)
    }

    fn from_network_bytes(&mut self, buffer: &mut Buffer) -> DNSResult<()> {
        self.id = buffer.get_u16()?;
        let flags = buffer.get_u16()?;
        self.unpack_flags(flags)?;
        self.qdcount = buffer.get_u16()?;
        self.ancount = buffer.get_u16()?;
        self.nscount = buffer.get_u16()?;
        self.arcount = buffer.get_u16()?;
        Ok(())
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ";; ->>HEADER<<- opcode: {:?}, status: {:?}, id: {}\n;; flags:{}{}{}{}{}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            self.opcode,
            self.rcode,
            self.id,
            if matches!(self.qr, PacketType::Response) { " qr" } else { "" },
            if self.aa { " aa" } else { "" },
            if self.tc { " tc" } else { "" },
            if self.rd { " rd" } else { "" },
            if self.ra { " ra" } else { "" },
            self.qdcount,
            self.ancount,
            self.nscount,
            self.arcount,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_roundtrip_preserves_every_flag() {
        let header = Header {
            id: 0xBEEF,
            qr: PacketType::Response,
            opcode: OpCode::Query,
            aa: true,
            tc: false,
            rd: true,
            ra: true,
            z: false,
            ad: true,
            cd: false,
            rcode: ResponseCode::NXDomain,
            qdcount: 1,
            ancount: 2,
            nscount: 0,
            arcount: 1,
        };
        let mut buf = Buffer::new();
        header.to_network_bytes(&mut buf).unwrap();
        assert_eq!(buf.len(), 12);

        let mut read = Buffer::from_bytes(buf.into_vec());
        let mut out = Header::default();
        out.from_network_bytes(&mut read).unwrap();
        assert_eq!(out, header);
    }
}
