//! DS, DNSKEY, RRSIG, NSEC, NSEC3, NSEC3PARAM (RFC 4034 / 5155).
//!
//! This crate covers only the wire format -- no signature or hash
//! verification is performed anywhere in this module (that's the named
//! Non-goal "DNSSEC signature verification"). Type bitmaps (NSEC/NSEC3) are
//! kept as opaque bytes rather than decoded into a set of covered types;
//! nothing downstream of parsing needs the decoded form.

use std::fmt;

use crate::buffer::Buffer;
use crate::enums::{DnsSecAlgorithm, RecordType};
use crate::error::DNSResult;
use crate::name::DomainName;
use crate::wire::Wire;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ds {
    pub key_tag: u16,
    pub algorithm: DnsSecAlgorithm,
    pub digest_type: u8,
    pub digest: Vec<u8>,
}

impl fmt::Display for Ds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.key_tag,
            self.algorithm,
            self.digest_type,
            hex::encode(&self.digest)
        )
    }
}

impl Ds {
    pub fn parse(buffer: &mut Buffer, rdlength: u16) -> DNSResult<Self> {
        let end = buffer.offset() + rdlength as usize;
        let key_tag = buffer.get_u16()?;
        let mut algorithm = DnsSecAlgorithm::default();
        algorithm.from_network_bytes(buffer)?;
        let digest_type = buffer.get_u8()?;
        let digest = buffer.get(end - buffer.offset())?.to_vec();
        Ok(Ds {
            key_tag,
            algorithm,
            digest_type,
            digest,
        })
    }

    pub fn pack(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        let mut n = buffer.put_u16(self.key_tag);
        n += self.algorithm.to_network_bytes(buffer)?;
        n += buffer.put_u8(self.digest_type);
        n += buffer.append(&self.digest);
        Ok(n)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dnskey {
    pub flags: u16,
    pub protocol: u8,
    pub algorithm: DnsSecAlgorithm,
    pub public_key: Vec<u8>,
}

impl fmt::Display for Dnskey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.flags,
            self.protocol,
            self.algorithm,
            hex::encode(&self.public_key)
        )
    }
}

impl Dnskey {
    pub fn parse(buffer: &mut Buffer, rdlength: u16) -> DNSResult<Self> {
        let end = buffer.offset() + rdlength as usize;
        let flags = buffer.get_u16()?;
        let protocol = buffer.get_u8()?;
        let mut algorithm = DnsSecAlgorithm::default();
        algorithm.from_network_bytes(buffer)?;
        let public_key = buffer.get(end - buffer.offset())?.to_vec();
        Ok(Dnskey {
            flags,
            protocol,
            algorithm,
            public_key,
        })
    }

    pub fn pack(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        let mut n = buffer.put_u16(self.flags);
        n += buffer.put_u8(self.protocol);
        n += self.algorithm.to_network_bytes(buffer)?;
        n += buffer.append(&self.public_key);
        Ok(n)
    }
}

/// Signed data must never be name-compressed, so `signer_name` always uses
/// `encode_name_nocompress`/plain decode, independent of the rest of the
/// message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rrsig {
    pub type_covered: RecordType,
    pub algorithm: DnsSecAlgorithm,
    pub labels: u8,
    pub original_ttl: u32,
    pub expiration: u32,
    pub inception: u32,
    pub key_tag: u16,
    pub signer_name: DomainName,
    pub signature: Vec<u8>,
}

impl fmt::Display for Rrsig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {}",
            self.type_covered,
            self.algorithm,
            self.labels,
            self.original_ttl,
            self.expiration,
            self.inception,
            self.key_tag,
            self.signer_name,
            hex::encode(&self.signature)
        )
    }
}

impl Rrsig {
    pub fn parse(buffer: &mut Buffer, rdlength: u16) -> DNSResult<Self> {
        let end = buffer.offset() + rdlength as usize;
        let mut type_covered = RecordType::default();
        type_covered.from_network_bytes(buffer)?;
        let mut algorithm = DnsSecAlgorithm::default();
        algorithm.from_network_bytes(buffer)?;
        let labels = buffer.get_u8()?;
        let original_ttl = buffer.get_u32()?;
        let expiration = buffer.get_u32()?;
        let inception = buffer.get_u32()?;
        let key_tag = buffer.get_u16()?;
        // names in RRSIG are never compressed, on the wire or when decoding,
        // but the decoder handles compressed input transparently either way
        // -- only the encoder's choice matters for canonical form.
        let signer_name = buffer.decode_name()?;
        let signature = buffer.get(end - buffer.offset())?.to_vec();
        Ok(Rrsig {
            type_covered,
            algorithm,
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer_name,
            signature,
        })
    }

    pub fn pack(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        let mut n = self.type_covered.to_network_bytes(buffer)?;
        n += self.algorithm.to_network_bytes(buffer)?;
        n += buffer.put_u8(self.labels);
        n += buffer.put_u32(self.original_ttl);
        n += buffer.put_u32(self.expiration);
        n += buffer.put_u32(self.inception);
        n += buffer.put_u16(self.key_tag);
        n += buffer.encode_name_nocompress(&self.signer_name)?;
        n += buffer.append(&self.signature);
        Ok(n)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nsec {
    pub next_domain: DomainName,
    pub type_bitmaps: Vec<u8>,
}

impl fmt::Display for Nsec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.next_domain, hex::encode(&self.type_bitmaps))
    }
}

impl Nsec {
    pub fn parse(buffer: &mut Buffer, rdlength: u16) -> DNSResult<Self> {
        let end = buffer.offset() + rdlength as usize;
        let next_domain = buffer.decode_name()?;
        let type_bitmaps = buffer.get(end - buffer.offset())?.to_vec();
        Ok(Nsec {
            next_domain,
            type_bitmaps,
        })
    }

    pub fn pack(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        let mut n = buffer.encode_name_nocompress(&self.next_domain)?;
        n += buffer.append(&self.type_bitmaps);
        Ok(n)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nsec3 {
    pub hash_algorithm: u8,
    pub flags: u8,
    pub iterations: u16,
    pub salt: Vec<u8>,
    pub next_hashed_owner: Vec<u8>,
    pub type_bitmaps: Vec<u8>,
}

impl fmt::Display for Nsec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.hash_algorithm,
            self.flags,
            self.iterations,
            hex::encode(&self.salt),
            hex::encode(&self.next_hashed_owner)
        )
    }
}

impl Nsec3 {
    pub fn parse(buffer: &mut Buffer, rdlength: u16) -> DNSResult<Self> {
        let end = buffer.offset() + rdlength as usize;
        let hash_algorithm = buffer.get_u8()?;
        let flags = buffer.get_u8()?;
        let iterations = buffer.get_u16()?;
        let salt = buffer.get_with_length()?.to_vec();
        let next_hashed_owner = buffer.get_with_length()?.to_vec();
        let type_bitmaps = buffer.get(end - buffer.offset())?.to_vec();
        Ok(Nsec3 {
            hash_algorithm,
            flags,
            iterations,
            salt,
            next_hashed_owner,
            type_bitmaps,
        })
    }

    pub fn pack(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        let mut n = buffer.put_u8(self.hash_algorithm);
        n += buffer.put_u8(self.flags);
        n += buffer.put_u16(self.iterations);
        n += buffer.append_with_length(&self.salt)?;
        n += buffer.append_with_length(&self.next_hashed_owner)?;
        n += buffer.append(&self.type_bitmaps);
        Ok(n)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nsec3Param {
    pub hash_algorithm: u8,
    pub flags: u8,
    pub iterations: u16,
    pub salt: Vec<u8>,
}

impl fmt::Display for Nsec3Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.hash_algorithm,
            self.flags,
            self.iterations,
            hex::encode(&self.salt)
        )
    }
}

impl Nsec3Param {
    pub fn parse(buffer: &mut Buffer, _rdlength: u16) -> DNSResult<Self> {
        let hash_algorithm = buffer.get_u8()?;
        let flags = buffer.get_u8()?;
        let iterations = buffer.get_u16()?;
        let salt = buffer.get_with_length()?.to_vec();
        Ok(Nsec3Param {
            hash_algorithm,
            flags,
            iterations,
            salt,
        })
    }

    pub fn pack(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        let mut n = buffer.put_u8(self.hash_algorithm);
        n += buffer.put_u8(self.flags);
        n += buffer.put_u16(self.iterations);
        n += buffer.append_with_length(&self.salt)?;
        Ok(n)
    }
}
