//! Symbolic names for the numeric fields scattered through a DNS message.
//!
//! Two shapes are used, depending on whether the IANA registry is closed or
//! open-ended:
//!
//! - Packet-level enums (`OpCode`, `ResponseCode`, `PacketType`) are a fixed,
//!   closed set — these use the `#[derive(DnsEnum)]` machinery.
//! - `RecordType` and `RClass` are open registries (new RR types are added
//!   continually, and unknown values must still round-trip on the wire and
//!   in zone text as `TYPE<N>`/`CLASS<N>`, per RFC 3597). These are hand-rolled
//!   newtypes over `u16` with a static name table and an infallible fallback,
//!   generalising the `TYPE(u16)` pattern from the author's later `dqy` crate
//!   without depending on its external proc-macro crates.

use std::fmt;
use std::str::FromStr;

use dns_derive::DnsEnum;

use crate::buffer::Buffer;
use crate::error::DNSResult;
use crate::wire::Wire;

macro_rules! open_u16_enum {
    ($name:ident, $doc:literal, { $($variant:ident = $value:expr),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u16);

        impl $name {
            $(pub const $variant: $name = $name($value);)+

            const NAMES: &'static [(&'static str, u16)] = &[
                $((stringify!($variant), $value)),+
            ];

            pub fn name(&self) -> Option<&'static str> {
                Self::NAMES.iter().find(|(_, v)| *v == self.0).map(|(n, _)| *n)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.name() {
                    Some(n) => write!(f, "{n}"),
                    None => write!(f, concat!(stringify!($name), "<{}>"), self.0),
                }
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if let Some((_, v)) = Self::NAMES.iter().find(|(n, _)| n.eq_ignore_ascii_case(s)) {
                    return Ok($name(*v));
                }
                let generic_prefix = concat!(stringify!($name), "<");
                if let Some(rest) = s.strip_prefix(generic_prefix) {
                    if let Some(digits) = rest.strip_suffix('>') {
                        return digits.parse().map($name).map_err(|_| format!("invalid numeric form '{s}'"));
                    }
                }
                Err(format!("unknown {} mnemonic '{}'", stringify!($name), s))
            }
        }

        impl From<u16> for $name {
            fn from(v: u16) -> Self {
                $name(v)
            }
        }

        impl From<$name> for u16 {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name(0)
            }
        }

        impl Wire for $name {
            fn to_network_bytes(&self, buffer: &mut Buffer) -> DNSResult<usize> {
                self.0.to_network_bytes(buffer)
            }

            fn from_network_bytes(&mut self, buffer: &mut Buffer) -> DNSResult<()> {
                self.0.from_network_bytes(buffer)
            }
        }
    };
}

open_u16_enum!(RecordType, "A DNS record TYPE code (RFC 1035 §3.2.2 and later RFCs).", {
    A = 1, NS = 2, CNAME = 5, SOA = 6, PTR = 12, HINFO = 13, MX = 15, TXT = 16,
    RP = 17, AFSDB = 18, SIG = 24, KEY = 25, AAAA = 28, LOC = 29, SRV = 33,
    NAPTR = 35, DNAME = 39, OPT = 41, DS = 43, SSHFP = 44, RRSIG = 46,
    NSEC = 47, DNSKEY = 48, NSEC3 = 50, NSEC3PARAM = 51, TLSA = 52,
    SMIMEA = 53, OPENPGPKEY = 61, CAA = 257, SVCB = 64, HTTPS = 65,
    AXFR = 252, ANY = 255,
});

open_u16_enum!(RClass, "A DNS record CLASS code.", {
    IN = 1, CS = 2, CH = 3, HS = 4, ANY = 255,
});

open_u16_enum!(EdnsOptionCode, "An EDNS0 option code (RFC 6891 §6.1.2 registry).", {
    LLQ = 1, UL = 2, NSID = 3, DAU = 5, DHU = 6, N3U = 7, CLIENT_SUBNET = 8,
    EXPIRE = 9, COOKIE = 10, TCP_KEEPALIVE = 11, PADDING = 12, CHAIN = 13,
    KEY_TAG = 14,
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnsSecAlgorithm(pub u8);

impl DnsSecAlgorithm {
    pub const RSAMD5: Self = DnsSecAlgorithm(1);
    pub const DSA: Self = DnsSecAlgorithm(3);
    pub const RSASHA1: Self = DnsSecAlgorithm(5);
    pub const RSASHA256: Self = DnsSecAlgorithm(8);
    pub const RSASHA512: Self = DnsSecAlgorithm(10);
    pub const ECC_GOST: Self = DnsSecAlgorithm(12);
    pub const ECDSAP256SHA256: Self = DnsSecAlgorithm(13);
    pub const ECDSAP384SHA384: Self = DnsSecAlgorithm(14);
    pub const ED25519: Self = DnsSecAlgorithm(15);
    pub const ED448: Self = DnsSecAlgorithm(16);
}

impl fmt::Display for DnsSecAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Wire for DnsSecAlgorithm {
    fn to_network_bytes(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        self.0.to_network_bytes(buffer)
    }

    fn from_network_bytes(&mut self, buffer: &mut Buffer) -> DNSResult<()> {
        self.0.from_network_bytes(buffer)
    }
}

/// Whether a message is a query or a response (header QR bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, DnsEnum)]
pub enum PacketType {
    Query = 0,
    Response = 1,
}

/// Header OPCODE field (RFC 1035 §4.1.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, DnsEnum)]
pub enum OpCode {
    Query = 0,
    IQuery = 1,
    Status = 2,
    Notify = 4,
    Update = 5,
}

/// Header RCODE field, the base 4-bit set (extended codes arrive via EDNS0
/// and are combined by `crate::edns`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, DnsEnum)]
pub enum ResponseCode {
    NoError = 0,
    FormErr = 1,
    ServFail = 2,
    NXDomain = 3,
    NotImp = 4,
    Refused = 5,
    YXDomain = 6,
    YXRRSet = 7,
    NXRRSet = 8,
    NotAuth = 9,
    NotZone = 10,
}
