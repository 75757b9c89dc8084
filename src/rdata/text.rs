//! HINFO, TXT, RP, AFSDB.

use std::fmt;

use dns_derive::DnsStruct;

use crate::buffer::Buffer;
use crate::char_string::CharacterString;
use crate::error::DNSResult;
use crate::name::DomainName;
use crate::wire::Wire;

#[derive(Debug, Clone, Default, PartialEq, Eq, DnsStruct)]
pub struct Hinfo {
    pub cpu: CharacterString,
    pub os: CharacterString,
}

impl fmt::Display for Hinfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.cpu, self.os)
    }
}

/// One or more character-strings, concatenated for display as most tools do
/// (`"part1" "part2"`). Unlike the fixed-field records, how many chunks
/// there are isn't known up front -- parsing stops when `rdlength` bytes
/// have been consumed, not when a terminator is seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Txt(pub Vec<CharacterString>);

impl fmt::Display for Txt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

impl Txt {
    pub fn parse(buffer: &mut Buffer, rdlength: u16) -> DNSResult<Self> {
        let end = buffer.offset() + rdlength as usize;
        let mut chunks = Vec::new();
        while buffer.offset() < end {
            let mut cs = CharacterString::default();
            cs.from_network_bytes(buffer)?;
            chunks.push(cs);
        }
        Ok(Txt(chunks))
    }

    pub fn pack(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        let mut n = 0;
        for chunk in &self.0 {
            n += chunk.to_network_bytes(buffer)?;
        }
        Ok(n)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, DnsStruct)]
pub struct Rp {
    pub mbox: DomainName,
    pub txt: DomainName,
}

impl fmt::Display for Rp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mbox, self.txt)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, DnsStruct)]
pub struct Afsdb {
    pub subtype: u16,
    pub hostname: DomainName,
}

impl fmt::Display for Afsdb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.subtype, self.hostname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hinfo_roundtrip() {
        let hinfo = Hinfo {
            cpu: CharacterString::from("INTEL-64"),
            os: CharacterString::from("LINUX"),
        };
        let mut buf = Buffer::new();
        hinfo.to_network_bytes(&mut buf).unwrap();
        let mut read = Buffer::from_bytes(buf.into_vec());
        let mut out = Hinfo::default();
        out.from_network_bytes(&mut read).unwrap();
        assert_eq!(out, hinfo);
    }

    #[test]
    fn txt_multi_chunk_bounded_by_rdlength() {
        let txt = Txt(vec![CharacterString::from("hello"), CharacterString::from("world")]);
        let mut buf = Buffer::new();
        let written = txt.pack(&mut buf).unwrap();
        let mut read = Buffer::from_bytes(buf.into_vec());
        let out = Txt::parse(&mut read, written as u16).unwrap();
        assert_eq!(out, txt);
        assert_eq!(out.to_string(), "\"hello\" \"world\"");
    }
}
