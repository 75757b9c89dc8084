//! A DNS wire-format codec: message parsing/packing, name compression, and
//! the RDATA catalog, built around a single cursor-based [`buffer::Buffer`]
//! shared by every `Wire` implementation in the crate.
//!
//! This crate covers the wire format only: no resolver (recursion, caching),
//! no authoritative server logic, no DNSSEC signature verification, and no
//! async I/O.

pub mod bit;
pub mod buffer;
pub mod char_string;
pub mod edns;
pub mod enums;
pub mod error;
pub mod header;
pub mod message;
pub mod name;
pub mod question;
pub mod rdata;
pub mod rr;
pub mod transport;
pub mod wire;
pub mod zone;

pub use buffer::Buffer;
pub use edns::Edns0;
pub use enums::{OpCode, PacketType, RClass, RecordType, ResponseCode};
pub use error::{BufferError, DNSError, DNSLabelError, DNSResult};
pub use header::Header;
pub use message::DNSMessage;
pub use name::DomainName;
pub use question::Question;
pub use rdata::RData;
pub use rr::ResourceRecord;
pub use wire::Wire;
