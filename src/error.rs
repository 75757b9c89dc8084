//! Structured error types.
//!
//! Buffer-level failures (bounds, compression pointers) live in their own
//! [`BufferError`] so that callers can match on "malformed wire data"
//! separately from higher-level semantic violations, with `thiserror`
//! generating the boilerplate.

use thiserror::Error;

/// Failures that can occur while reading or writing the raw byte cursor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("read past end of buffer: wanted {wanted} bytes at offset {offset}, only {remaining} remain")]
    OutOfBounds {
        offset: usize,
        wanted: usize,
        remaining: usize,
    },

    #[error("compression pointer at offset {offset} targets {target}, which is not strictly before it")]
    ForwardPointer { offset: usize, target: usize },

    #[error("compression pointer at offset {offset} re-enters an offset already visited in this name")]
    RecursivePointer { offset: usize },

    #[error("label length byte {0:#04x} uses a reserved high-bit pattern (01 or 10)")]
    ReservedLabelPattern(u8),

    #[error("label bytes at offset {offset} are not valid UTF-8")]
    InvalidLabelEncoding { offset: usize },

    #[error("length-prefixed field of {0} bytes does not fit in a u8 length prefix")]
    LengthPrefixOverflow(usize),
}

/// Semantic violations detectable without further bytes, plus buffer errors
/// bubbled up via `#[from]`. Not `Clone`/`PartialEq`: it carries `io::Error`
/// for transport failures, which supports neither.
#[derive(Error, Debug)]
pub enum DNSError {
    #[error(transparent)]
    Buffer(#[from] BufferError),

    #[error(transparent)]
    Label(#[from] DNSLabelError),

    #[error("rdata for type {rtype} declared rdlength {declared} but {consumed} bytes were consumed")]
    RDataLengthMismatch {
        rtype: u16,
        declared: u16,
        consumed: u16,
    },

    #[error("message contains more than one EDNS0 (OPT) record")]
    DuplicateEdns,

    #[error("SvcParamKey {0} appears more than once in the same SVCB/HTTPS record")]
    DuplicateSvcParam(u16),

    #[error("EDNS0 option declared length {declared} exceeds {available} remaining rdata bytes")]
    EdnsOptionOverflow { declared: u16, available: u16 },

    #[error("unrecognised DNSSEC algorithm number {0}")]
    UnknownAlgorithm(u8),

    #[error("invalid header field: {0}")]
    InvalidHeaderField(String),

    #[error("transport reply transaction id {got:#06x} does not match query id {want:#06x}")]
    TransactionIdMismatch { want: u16, got: u16 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Label- and name-construction failures, independent of any particular buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DNSLabelError {
    #[error("label of {0} bytes exceeds the 63-byte maximum")]
    LabelTooLong(usize),

    #[error("domain name of {0} bytes exceeds the 253-byte maximum")]
    NameTooLong(usize),

    #[error("domain name is empty where a non-root name was required")]
    EmptyName,

    #[error("invalid escape sequence in presentation-format name: {0}")]
    InvalidEscape(String),

    #[error("IDNA encoding failed for label {0:?}")]
    Idna(String),
}

pub type DNSResult<T> = Result<T, DNSError>;
