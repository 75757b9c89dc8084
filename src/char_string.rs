//! `<character-string>`: a length-prefixed (u8) byte string, as used inside
//! TXT, HINFO, NAPTR and others. Owns its bytes rather than borrowing from
//! the read buffer.

use std::fmt;

use crate::buffer::Buffer;
use crate::error::DNSResult;
use crate::wire::Wire;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterString(pub Vec<u8>);

impl CharacterString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for CharacterString {
    fn from(s: &str) -> Self {
        CharacterString(s.as_bytes().to_vec())
    }
}

impl fmt::Display for CharacterString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", String::from_utf8_lossy(&self.0))
    }
}

impl Wire for CharacterString {
    fn to_network_bytes(&self, buffer: &mut Buffer) -> DNSResult<usize> {
        buffer.append_with_length(&self.0)
    }

    fn from_network_bytes(&mut self, buffer: &mut Buffer) -> DNSResult<()> {
        self.0 = buffer.get_with_length()?.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_buffer() {
        let cs = CharacterString::from("hello world");
        let mut buf = Buffer::new();
        cs.to_network_bytes(&mut buf).unwrap();

        let mut read = Buffer::from_bytes(buf.into_vec());
        let mut out = CharacterString::default();
        out.from_network_bytes(&mut read).unwrap();
        assert_eq!(out, cs);
    }

    #[test]
    fn display_quotes_content() {
        assert_eq!(CharacterString::from("abc").to_string(), "\"abc\"");
    }
}
