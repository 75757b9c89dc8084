//! A growable byte buffer with a single cursor shared by reads and writes.
//! An owned cursor is what lets the name codec (`crate::name`) backfill
//! `rdlength`/section counts in place and share one compression table
//! across an entire message.

use byteorder::{BigEndian, ByteOrder};

use crate::error::{BufferError, DNSResult};
use crate::wire::Wire;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Buffer {
    data: Vec<u8>,
    offset: usize,
    /// Name-compression table: label-suffix -> offset at which it was first
    /// written. Populated only by `crate::name`'s `encode_name`; consulted by
    /// nothing else. Lives for the duration of a single message pack.
    pub(crate) names: std::collections::HashMap<Vec<Vec<u8>>, usize>,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing bytes for reading (cursor starts at 0).
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Buffer {
            data,
            offset: 0,
            names: std::collections::HashMap::new(),
        }
    }

    /// Discard the compression table, starting a fresh one (done once per
    /// message pack; sharing it across sections is the point, sharing it
    /// across messages is not).
    pub fn reset_compression_table(&mut self) {
        self.names.clear();
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Reposition the cursor, used when following a compression pointer.
    pub fn seek(&mut self, offset: usize) {
        self.offset = offset;
    }

    fn require(&self, n: usize) -> DNSResult<()> {
        if self.remaining() < n {
            return Err(BufferError::OutOfBounds {
                offset: self.offset,
                wanted: n,
                remaining: self.remaining(),
            }
            .into());
        }
        Ok(())
    }

    /// Raw read of `n` bytes, advancing the cursor.
    pub fn get(&mut self, n: usize) -> DNSResult<&[u8]> {
        self.require(n)?;
        let start = self.offset;
        self.offset += n;
        Ok(&self.data[start..self.offset])
    }

    /// Peek `n` bytes without advancing the cursor.
    pub fn peek(&self, n: usize) -> DNSResult<&[u8]> {
        self.require(n)?;
        Ok(&self.data[self.offset..self.offset + n])
    }

    /// Raw write, extending the buffer if the cursor sits at its end, or
    /// overwriting in place otherwise (the backfill pattern used for
    /// rdlength and section counts).
    pub fn append(&mut self, bytes: &[u8]) -> usize {
        if self.offset == self.data.len() {
            self.data.extend_from_slice(bytes);
        } else {
            let end = self.offset + bytes.len();
            if end > self.data.len() {
                self.data.resize(end, 0);
            }
            self.data[self.offset..end].copy_from_slice(bytes);
        }
        self.offset += bytes.len();
        bytes.len()
    }

    /// Write a one-byte length prefix followed by `bytes`. Restricted to
    /// u8-sized length prefixes (see DESIGN.md) since that is the only
    /// format width ever used in practice (character-strings).
    pub fn append_with_length(&mut self, bytes: &[u8]) -> DNSResult<usize> {
        if bytes.len() > u8::MAX as usize {
            return Err(BufferError::LengthPrefixOverflow(bytes.len()).into());
        }
        let mut n = self.append(&[bytes.len() as u8]);
        n += self.append(bytes);
        Ok(n)
    }

    /// Read a one-byte length prefix, then that many bytes.
    pub fn get_with_length(&mut self) -> DNSResult<&[u8]> {
        let len = self.get_u8()? as usize;
        self.get(len)
    }

    pub fn get_u8(&mut self) -> DNSResult<u8> {
        Ok(self.get(1)?[0])
    }

    pub fn get_u16(&mut self) -> DNSResult<u16> {
        Ok(BigEndian::read_u16(self.get(2)?))
    }

    pub fn get_u32(&mut self) -> DNSResult<u32> {
        Ok(BigEndian::read_u32(self.get(4)?))
    }

    pub fn get_u64(&mut self) -> DNSResult<u64> {
        Ok(BigEndian::read_u64(self.get(8)?))
    }

    pub fn get_i32(&mut self) -> DNSResult<i32> {
        Ok(BigEndian::read_i32(self.get(4)?))
    }

    pub fn put_u8(&mut self, v: u8) -> usize {
        self.append(&[v])
    }

    pub fn put_u16(&mut self, v: u16) -> usize {
        let mut b = [0u8; 2];
        BigEndian::write_u16(&mut b, v);
        self.append(&b)
    }

    pub fn put_u32(&mut self, v: u32) -> usize {
        let mut b = [0u8; 4];
        BigEndian::write_u32(&mut b, v);
        self.append(&b)
    }

    pub fn put_u64(&mut self, v: u64) -> usize {
        let mut b = [0u8; 8];
        BigEndian::write_u64(&mut b, v);
        self.append(&b)
    }

    pub fn put_i32(&mut self, v: i32) -> usize {
        let mut b = [0u8; 4];
        BigEndian::write_i32(&mut b, v);
        self.append(&b)
    }

    /// Reserve two bytes for a length prefix to be backfilled later, returning
    /// the offset at which to write it once the body's length is known.
    pub fn reserve_u16(&mut self) -> usize {
        let at = self.offset;
        self.put_u16(0);
        at
    }

    /// Backfill a previously reserved u16 length field without moving the
    /// cursor (used for rdlength and header section counts).
    pub fn backfill_u16(&mut self, at: usize, value: u16) {
        let saved = self.offset;
        self.offset = at;
        self.put_u16(value);
        self.offset = saved;
    }
}

macro_rules! impl_wire_for_int {
    ($ty:ty, $get:ident, $put:ident) => {
        impl Wire for $ty {
            fn to_network_bytes(&self, buffer: &mut Buffer) -> DNSResult<usize> {
                Ok(buffer.$put(*self))
            }

            fn from_network_bytes(&mut self, buffer: &mut Buffer) -> DNSResult<()> {
                *self = buffer.$get()?;
                Ok(())
            }
        }
    };
}

impl_wire_for_int!(u8, get_u8, put_u8);
impl_wire_for_int!(u16, get_u16, put_u16);
impl_wire_for_int!(u32, get_u32, put_u32);
impl_wire_for_int!(u64, get_u64, put_u64);
impl_wire_for_int!(i32, get_i32, put_i32);
