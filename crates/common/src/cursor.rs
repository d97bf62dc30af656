//! Bounds-checked sequential byte cursors over fixed buffers
//!
//! `ByteReader` consumes an input buffer front to back and hands out views
//! borrowed from it, so nothing read off the wire is copied before it has
//! been validated. `ByteWriter` appends into a caller-provided buffer and
//! fails instead of growing.

use tls_ecdhe_api::error::validate;
use tls_ecdhe_api::{Error, Result};
use tls_ecdhe_internal::endian::{u16_from_be_bytes, u16_to_be_bytes};

/// Sequential reader over a read-only input buffer
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Offset of the next unread byte
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Read a big-endian u16
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16_from_be_bytes(self.read_array::<2>()?))
    }

    /// Consume exactly `N` bytes as a fixed-size array
    pub fn read_array<const N: usize>(&mut self) -> Result<&'a [u8; N]> {
        let mut probe = self.clone();
        let bytes = probe.read_bytes(N)?;
        let array = <&[u8; N]>::try_from(bytes).map_err(|_| Error::MalformedEncoding {
            context: "ByteReader::read_array",
            expected: N,
            actual: bytes.len(),
        })?;
        *self = probe;
        Ok(array)
    }

    /// Consume `len` bytes and return a view into the input
    ///
    /// On failure the cursor does not move.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        validate::min_length("ByteReader::read_bytes", self.remaining(), len)?;
        let out = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    /// The bytes consumed between offset `start` and the current position
    ///
    /// Used to hand the exact signed span of a message to the transcript.
    pub fn consumed_since(&self, start: usize) -> &'a [u8] {
        let start = start.min(self.pos);
        &self.data[start..self.pos]
    }
}

/// Sequential writer into a fixed output buffer
#[derive(Debug)]
pub struct ByteWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> ByteWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bytes written so far
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Room left in the output buffer
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Everything written so far
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// The bytes written between offset `start` and the current position
    pub fn written_since(&self, start: usize) -> &[u8] {
        let start = start.min(self.pos);
        &self.buf[start..self.pos]
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_bytes(&[value])
    }

    /// Write a big-endian u16
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write_bytes(&u16_to_be_bytes(value))
    }

    /// Append `bytes`; on failure nothing is written
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        validate::capacity("ByteWriter::write_bytes", self.remaining(), bytes.len())?;
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }
}
