//! Forward-only cursors over byte buffers.
//!
//! Decoding never seeks. A [`Reader`] is a window `(start, len)` into a shared
//! buffer plus a position inside that window. Sub-regions are decoded through
//! [`Reader::nested()`], which hands out a child window and moves the parent
//! past it by the *declared* length, so bytes the child leaves unread are
//! skipped rather than misread by the parent.

use std::convert::TryFrom;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Reader<'a> {
    buf: &'a [u8],
    start: usize,
    len: usize,
    pos: usize,
}

impl<'a> Reader<'a> {
    /// A reader whose window is all of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Reader { buf, start: 0, len: buf.len(), pos: 0 }
    }

    /// Bytes consumed so far, relative to the start of this window.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.len - self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    fn check(&self, needed: usize) -> Result<()> {
        if needed > self.remaining() {
            return Err(Error::TruncatedInput { needed, remaining: self.remaining() });
        }

        Ok(())
    }

    /// Returns the next `n` bytes without consuming them.
    pub fn peek(&self, n: usize) -> Result<&'a [u8]> {
        self.check(n)?;
        let at = self.start + self.pos;
        Ok(&self.buf[at..at + n])
    }

    /// Consumes and returns the next `n` bytes.
    pub fn read(&mut self, n: usize) -> Result<&'a [u8]> {
        let bytes = self.peek(n)?;
        self.pos += n;
        Ok(bytes)
    }

    /// Consumes everything left in the window.
    pub fn read_rest(&mut self) -> &'a [u8] {
        let at = self.start + self.pos;
        self.pos = self.len;
        &self.buf[at..self.start + self.len]
    }

    /// Splits off a child window over the next `max_len` bytes and advances
    /// `self` past all of them.
    pub fn nested(&mut self, max_len: usize) -> Result<Reader<'a>> {
        self.check(max_len)?;
        let child = Reader { buf: self.buf, start: self.start + self.pos, len: max_len, pos: 0 };
        self.pos += max_len;
        Ok(child)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read(N)?);
        Ok(out)
    }

    pub fn peek_u32_le(&self) -> Result<u32> {
        let mut out = [0u8; 4];
        out.copy_from_slice(self.peek(4)?);
        Ok(u32::from_le_bytes(out))
    }

    pub fn u16_le(&mut self) -> Result<u16> {
        self.array().map(u16::from_le_bytes)
    }

    pub fn u32_le(&mut self) -> Result<u32> {
        self.array().map(u32::from_le_bytes)
    }

    pub fn u32_be(&mut self) -> Result<u32> {
        self.array().map(u32::from_be_bytes)
    }

    pub fn i32_le(&mut self) -> Result<i32> {
        self.array().map(i32::from_le_bytes)
    }

    pub fn u64_be(&mut self) -> Result<u64> {
        self.array().map(u64::from_be_bytes)
    }

    pub fn f64_le(&mut self) -> Result<f64> {
        self.array().map(f64::from_le_bytes)
    }
}

/// Converts `len` for a 32-bit size or count field, naming `what` on failure.
pub(crate) fn u32_len(len: usize, what: &'static str) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::TooLarge(what))
}

/// Append-only counterpart of [`Reader`].
#[derive(Debug, Default)]
pub(crate) struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn with_capacity(capacity: usize) -> Self {
        Writer { buf: Vec::with_capacity(capacity) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn u16_le(&mut self, value: u16) {
        self.bytes(&value.to_le_bytes());
    }

    pub fn u32_le(&mut self, value: u32) {
        self.bytes(&value.to_le_bytes());
    }

    pub fn u32_be(&mut self, value: u32) {
        self.bytes(&value.to_be_bytes());
    }

    pub fn i32_le(&mut self, value: i32) {
        self.bytes(&value.to_le_bytes());
    }

    pub fn i32_be(&mut self, value: i32) {
        self.bytes(&value.to_be_bytes());
    }

    pub fn u64_be(&mut self, value: u64) {
        self.bytes(&value.to_be_bytes());
    }

    pub fn f64_le(&mut self, value: f64) {
        self.bytes(&value.to_le_bytes());
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
