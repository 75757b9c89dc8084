//! Domain names and the name-compression codec, ported from the reference
//! implementation's `label.py` (`DNSLabel`, `DNSBuffer.decode_name`,
//! `DNSBuffer.encode_name`/`encode_name_nocompress`).

use std::fmt;

use crate::bit::{get_bits, set_bits};
use crate::buffer::Buffer;
use crate::error::{BufferError, DNSLabelError, DNSResult};
use crate::wire::Wire;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// An owned, ordered sequence of labels. Never a reference into the buffer
/// it was parsed from: compression is purely a wire-format concern and must
/// not leak into the in-memory model.
#[derive(Debug, Clone, Default, Eq)]
pub struct DomainName {
    labels: Vec<Vec<u8>>,
}

impl DomainName {
    pub fn root() -> Self {
        DomainName { labels: Vec::new() }
    }

    pub fn from_labels(labels: Vec<Vec<u8>>) -> DNSResult<Self> {
        let name = DomainName { labels };
        name.check_lengths()?;
        Ok(name)
    }

    fn check_lengths(&self) -> DNSResult<()> {
        for label in &self.labels {
            if label.len() > MAX_LABEL_LEN {
                return Err(DNSLabelError::LabelTooLong(label.len()).into());
            }
        }
        if self.wire_len() > MAX_NAME_LEN {
            return Err(DNSLabelError::NameTooLong(self.wire_len()).into());
        }
        Ok(())
    }

    /// Total length as it would appear joined by dots (excludes the
    /// terminating root byte), matching the reference's `__len__`.
    pub fn wire_len(&self) -> usize {
        if self.labels.is_empty() {
            return 0;
        }
        self.labels.iter().map(|l| l.len() + 1).sum::<usize>() - 1
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[Vec<u8>] {
        &self.labels
    }

    /// Prepend a label (the reference's `DNSLabel.add`, used to build
    /// e.g. `_tcp.example.com` from `example.com`).
    pub fn add(&mut self, label: impl AsRef<[u8]>) {
        self.labels.insert(0, label.as_ref().to_vec());
    }

    fn lower_labels(&self) -> Vec<Vec<u8>> {
        self.labels
            .iter()
            .map(|l| l.to_ascii_lowercase())
            .collect()
    }

    /// Case-insensitive suffix test: does `self` end with `suffix`?
    pub fn matches_suffix(&self, suffix: &DomainName) -> bool {
        if suffix.labels.len() > self.labels.len() {
            return false;
        }
        let start = self.labels.len() - suffix.labels.len();
        self.labels[start..]
            .iter()
            .zip(suffix.labels.iter())
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }

    /// Remove a matching suffix, returning the remaining prefix labels.
    /// Returns `None` if `suffix` is not actually a suffix of `self`.
    pub fn strip_suffix(&self, suffix: &DomainName) -> Option<DomainName> {
        if !self.matches_suffix(suffix) {
            return None;
        }
        let keep = self.labels.len() - suffix.labels.len();
        Some(DomainName {
            labels: self.labels[..keep].to_vec(),
        })
    }

    /// Shell-glob match (`*`, `?`, `[...]`) over the lower-cased textual form,
    /// mirroring the reference's `fnmatch`-based `matchGlob`.
    pub fn matches_glob(&self, pattern: &str) -> bool {
        glob_match(&pattern.to_ascii_lowercase(), &self.to_string().to_ascii_lowercase())
    }

    /// IDNA (Unicode) rendering of this name, if the `idna` feature is
    /// enabled; otherwise falls back to the raw ASCII form.
    pub fn to_idna(&self) -> String {
        #[cfg(feature = "idna")]
        {
            self.labels
                .iter()
                .map(|l| {
                    idna::domain_to_unicode(&decode_label(l)).0
                })
                .collect::<Vec<_>>()
                .join(".")
                + "."
        }
        #[cfg(not(feature = "idna"))]
        {
            self.to_string()
        }
    }
}

/// Minimal shell-glob matcher supporting `*`, `?`, and literal characters,
/// sufficient for zone-style name patterns (no `[...]` classes needed by
/// any caller in this crate).
fn glob_match(pattern: &str, text: &str) -> bool {
    fn inner(p: &[u8], t: &[u8]) -> bool {
        match (p.first(), t.first()) {
            (None, None) => true,
            (Some(b'*'), _) => inner(&p[1..], t) || (!t.is_empty() && inner(p, &t[1..])),
            (Some(b'?'), Some(_)) => inner(&p[1..], &t[1..]),
            (Some(pc), Some(tc)) if pc == tc => inner(&p[1..], &t[1..]),
            _ => false,
        }
    }
    inner(pattern.as_bytes(), text.as_bytes())
}

/// `\NNN`-escape a byte that is outside the printable LDH range, matching the
/// reference `DNSLabel._decode`.
fn decode_label(label: &[u8]) -> String {
    let mut out = String::new();
    for &b in label {
        if (33..127).contains(&b) {
            out.push(b as char);
        } else {
            out.push_str(&format!("\\{:03}", b));
        }
    }
    out
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return write!(f, ".");
        }
        for label in &self.labels {
            write!(f, "{}.", decode_label(label))?;
        }
        Ok(())
    }
}

impl PartialEq for DomainName {
    fn eq(&self, other: &Self) -> bool {
        self.lower_labels() == other.lower_labels()
    }
}

impl std::hash::Hash for DomainName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.lower_labels().hash(state);
    }
}

impl TryFrom<&str> for DomainName {
    type Error = DNSLabelError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.is_empty() || s == "." {
            return Ok(DomainName::root());
        }
        let unescaped = unescape(s)?;
        let trimmed = unescaped.strip_suffix('.').unwrap_or(&unescaped);
        let labels: Vec<Vec<u8>> = trimmed
            .split('.')
            .map(|l| l.as_bytes().to_vec())
            .collect();
        let name = DomainName { labels };
        name.check_lengths().map_err(|e| match e {
            crate::error::DNSError::Label(l) => l,
            _ => unreachable!(),
        })?;
        Ok(name)
    }
}

/// Replace `\NNN` numeric escapes with the literal byte, as the reference
/// does before IDNA-encoding a presentation-format name.
fn unescape(s: &str) -> Result<String, DNSLabelError> {
    let bytes = s.as_bytes();
    let mut out = String::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 3 < bytes.len() && bytes[i + 1..i + 4].iter().all(u8::is_ascii_digit) {
            let digits = std::str::from_utf8(&bytes[i + 1..i + 4]).unwrap();
            let value: u32 = digits
                .parse()
                .map_err(|_| DNSLabelError::InvalidEscape(s.to_string()))?;
            let byte = u8::try_from(value).map_err(|_| DNSLabelError::InvalidEscape(s.to_string()))?;
            out.push(byte as char);
            i += 4;
        } else {
            out.push(bytes[i] as char);
            i += 1;
        }
    }
    Ok(out)
}

impl Buffer {
    /// Decode a (possibly compressed) name at the current cursor.
    pub fn decode_name(&mut self) -> DNSResult<DomainName> {
        self.decode_name_at(None)
    }

    fn decode_name_at(&mut self, last: Option<usize>) -> DNSResult<DomainName> {
        let mut labels = Vec::new();
        loop {
            let marker_offset = self.offset();
            let length = self.peek(1)?[0];

            match get_bits(length as u16, 6, 2) {
                0b11 => {
                    // pointer: two bytes, low 14 bits are the target offset.
                    let raw = self.get_u16()?;
                    let pointer = get_bits(raw, 0, 14) as usize;

                    if let Some(prev) = last {
                        if prev == marker_offset {
                            return Err(BufferError::RecursivePointer { offset: marker_offset }.into());
                        }
                    }
                    if pointer >= marker_offset {
                        return Err(BufferError::ForwardPointer {
                            offset: marker_offset,
                            target: pointer,
                        }
                        .into());
                    }

                    let saved = self.offset();
                    self.seek(pointer);
                    let rest = self.decode_name_at(Some(marker_offset))?;
                    self.seek(saved);
                    labels.extend(rest.labels);
                    break;
                }
                0b00 => {
                    let len = length as usize;
                    self.get_u8()?; // consume the length byte itself
                    if len == 0 {
                        break;
                    }
                    let raw_label_offset = self.offset();
                    let bytes = self.get(len)?.to_vec();
                    if std::str::from_utf8(&bytes).is_err() {
                        return Err(BufferError::InvalidLabelEncoding {
                            offset: raw_label_offset,
                        }
                        .into());
                    }
                    labels.push(bytes);
                }
                _ => return Err(BufferError::ReservedLabelPattern(length).into()),
            }
        }
        Ok(DomainName { labels })
    }

    /// Encode `name` using compression: any suffix already written earlier in
    /// this buffer is replaced with a pointer.
    pub fn encode_name(&mut self, name: &DomainName) -> DNSResult<usize> {
        self.encode_name_impl(name, true)
    }

    /// Encode `name` without ever consulting or populating the compression
    /// table -- required for RRSIG's canonical signed form.
    pub fn encode_name_nocompress(&mut self, name: &DomainName) -> DNSResult<usize> {
        self.encode_name_impl(name, false)
    }

    fn encode_name_impl(&mut self, name: &DomainName, compress: bool) -> DNSResult<usize> {
        name.check_lengths()?;
        let mut written = 0usize;
        let mut remaining: Vec<Vec<u8>> = name.labels.clone();

        loop {
            if compress {
                if let Some(&target) = self.names.get(&remaining) {
                    let pointer = set_bits(target as u16, 0b11, 14, 2);
                    written += self.put_u16(pointer);
                    return Ok(written);
                }
            }

            if remaining.is_empty() {
                written += self.put_u8(0);
                return Ok(written);
            }

            if compress {
                self.names.insert(remaining.clone(), self.offset());
            }
            let label = remaining.remove(0);
            written += self.append_with_length(&label)?;
        }
    }
}

impl Wire for DomainName {
    fn to_network_bytes(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        buffer.encode_name(self)
    }

    fn from_network_bytes(&mut self, buffer: &mut Buffer) -> DNSResult<()> {
        *self = buffer.decode_name()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> DomainName {
        DomainName::try_from(s).unwrap()
    }

    #[test]
    fn parses_and_displays_simple_name() {
        let n = name("www.example.com.");
        assert_eq!(n.to_string(), "www.example.com.");
        assert_eq!(n.labels().len(), 3);
    }

    #[test]
    fn root_name_is_empty_labels() {
        let n = name(".");
        assert!(n.is_root());
        assert_eq!(n.to_string(), ".");
    }

    #[test]
    fn equality_is_case_insensitive() {
        assert_eq!(name("Foo.Com."), name("foo.com."));
    }

    #[test]
    fn label_too_long_is_rejected() {
        let long_label = "a".repeat(64);
        let s = format!("{long_label}.com.");
        assert!(DomainName::try_from(s.as_str()).is_err());
    }

    #[test]
    fn name_too_long_is_rejected() {
        let label = "a".repeat(50);
        let s = (0..6).map(|_| label.clone()).collect::<Vec<_>>().join(".") + ".";
        assert!(DomainName::try_from(s.as_str()).is_err());
    }

    #[test]
    fn suffix_match_and_strip() {
        let n = name("www.example.com.");
        let suffix = name("example.com.");
        assert!(n.matches_suffix(&suffix));
        let stripped = n.strip_suffix(&suffix).unwrap();
        assert_eq!(stripped.to_string(), "www.");
    }

    #[test]
    fn glob_match_wildcards() {
        let n = name("www.example.com.");
        assert!(n.matches_glob("*.example.com."));
        assert!(!n.matches_glob("*.example.org."));
    }

    #[test]
    fn compressed_encode_reuses_suffix_pointer() {
        let mut buf = Buffer::new();
        let a = name("aaa.bbb.ccc.");
        let b = name("xxx.bbb.ccc.");
        let n1 = buf.encode_name(&a).unwrap();
        let n2 = buf.encode_name(&b).unwrap();
        // second name reuses "bbb.ccc." as a 2-byte pointer instead of
        // re-encoding both labels.
        assert_eq!(n1, 13);
        assert_eq!(n2, "xxx".len() + 1 + 2);
    }

    #[test]
    fn decode_follows_compression_pointer() {
        let mut buf = Buffer::new();
        let a = name("aaa.bbb.ccc.");
        let b = name("xxx.bbb.ccc.");
        buf.encode_name(&a).unwrap();
        buf.encode_name(&b).unwrap();

        let mut reader = Buffer::from_bytes(buf.into_vec());
        let decoded_a = reader.decode_name().unwrap();
        assert_eq!(decoded_a, a);
        let decoded_b = reader.decode_name().unwrap();
        assert_eq!(decoded_b, b);
    }

    #[test]
    fn decode_rejects_self_pointer() {
        // offset 0: a pointer byte pair pointing at offset 0 itself.
        let mut reader = Buffer::from_bytes(vec![0xC0, 0x00]);
        assert!(reader.decode_name().is_err());
    }

    #[test]
    fn decode_rejects_forward_pointer() {
        // pointer at offset 0 targeting offset 4, which is ahead of it.
        let mut reader = Buffer::from_bytes(vec![0xC0, 0x04, 0x00, 0x00, 0x00]);
        assert!(reader.decode_name().is_err());
    }

    #[test]
    fn nocompress_never_emits_pointer() {
        let mut buf = Buffer::new();
        let a = name("aaa.bbb.ccc.");
        buf.encode_name(&a).unwrap();
        let before = buf.offset();
        buf.encode_name_nocompress(&a).unwrap();
        // second encoding must repeat every label and terminator, not a 2-byte pointer
        assert_eq!(buf.offset() - before, 13);
    }
}
