//! CAA, TLSA/SMIMEA, SSHFP: certificate- and key-association records whose
//! final field is an opaque byte blob bounded by `rdlength`.

use std::fmt;

use crate::buffer::Buffer;
use crate::char_string::CharacterString;
use crate::error::DNSResult;
use crate::wire::Wire;

/// RFC 8659. `value` runs to the end of rdlength, not a character-string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caa {
    pub flags: u8,
    pub tag: CharacterString,
    pub value: Vec<u8>,
}

impl fmt::Display for Caa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} \"{}\"",
            self.flags,
            self.tag,
            String::from_utf8_lossy(&self.value)
        )
    }
}

impl Caa {
    pub fn parse(buffer: &mut Buffer, rdlength: u16) -> DNSResult<Self> {
        let end = buffer.offset() + rdlength as usize;
        let flags = buffer.get_u8()?;
        let mut tag = CharacterString::default();
        tag.from_network_bytes(buffer)?;
        let value = buffer.get(end - buffer.offset())?.to_vec();
        Ok(Caa { flags, tag, value })
    }

    pub fn pack(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        let mut n = buffer.put_u8(self.flags);
        n += self.tag.to_network_bytes(buffer)?;
        n += buffer.append(&self.value);
        Ok(n)
    }
}

/// RFC 6698 (TLSA) / RFC 8162 (SMIMEA) share this exact layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tlsa {
    pub usage: u8,
    pub selector: u8,
    pub matching_type: u8,
    pub cert_data: Vec<u8>,
}

impl fmt::Display for Tlsa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.usage,
            self.selector,
            self.matching_type,
            hex::encode(&self.cert_data)
        )
    }
}

impl Tlsa {
    pub fn parse(buffer: &mut Buffer, rdlength: u16) -> DNSResult<Self> {
        let end = buffer.offset() + rdlength as usize;
        let usage = buffer.get_u8()?;
        let selector = buffer.get_u8()?;
        let matching_type = buffer.get_u8()?;
        let cert_data = buffer.get(end - buffer.offset())?.to_vec();
        Ok(Tlsa {
            usage,
            selector,
            matching_type,
            cert_data,
        })
    }

    pub fn pack(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        let mut n = buffer.put_u8(self.usage);
        n += buffer.put_u8(self.selector);
        n += buffer.put_u8(self.matching_type);
        n += buffer.append(&self.cert_data);
        Ok(n)
    }
}

/// RFC 4255.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sshfp {
    pub algorithm: u8,
    pub fp_type: u8,
    pub fingerprint: Vec<u8>,
}

impl fmt::Display for Sshfp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.algorithm,
            self.fp_type,
            hex::encode(&self.fingerprint)
        )
    }
}

impl Sshfp {
    pub fn parse(buffer: &mut Buffer, rdlength: u16) -> DNSResult<Self> {
        let end = buffer.offset() + rdlength as usize;
        let algorithm = buffer.get_u8()?;
        let fp_type = buffer.get_u8()?;
        let fingerprint = buffer.get(end - buffer.offset())?.to_vec();
        Ok(Sshfp {
            algorithm,
            fp_type,
            fingerprint,
        })
    }

    pub fn pack(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        let mut n = buffer.put_u8(self.algorithm);
        n += buffer.put_u8(self.fp_type);
        n += buffer.append(&self.fingerprint);
        Ok(n)
    }
}
