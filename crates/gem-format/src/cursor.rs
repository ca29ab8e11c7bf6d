//! Bounds-checked little-endian reader over an immutable byte slice.
//!
//! Reads return `None` instead of failing when too few bytes remain, and a
//! failed read never moves the cursor. Callers decide whether a missing
//! value means "end of section" or "corrupt record".

use byteorder::{ByteOrder, LittleEndian};

#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Move to an absolute offset, clamped to the buffer length.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.data.len());
    }

    /// Advance by `n` bytes, stopping at the end of the buffer.
    pub fn skip(&mut self, n: usize) {
        self.seek(self.pos.saturating_add(n));
    }

    /// The `len` bytes starting `delta` bytes past the cursor, if present.
    fn window(&self, delta: usize, len: usize) -> Option<&'a [u8]> {
        let start = self.pos.checked_add(delta)?;
        let end = start.checked_add(len)?;
        self.data.get(start..end)
    }

    fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        let bytes = self.window(0, len)?;
        self.pos += len;
        Some(bytes)
    }

    pub fn peek_u8(&self) -> Option<u8> {
        self.window(0, 1).map(|b| b[0])
    }

    pub fn peek_i32(&self) -> Option<i32> {
        self.peek_i32_at(0)
    }

    pub fn peek_u32(&self) -> Option<u32> {
        self.window(0, 4).map(LittleEndian::read_u32)
    }

    /// Peek an `i32` located `delta` bytes past the cursor.
    pub fn peek_i32_at(&self, delta: usize) -> Option<i32> {
        self.window(delta, 4).map(LittleEndian::read_i32)
    }

    pub fn read_u8(&mut self) -> Option<u8> {
        self.take(1).map(|b| b[0])
    }

    pub fn read_i32(&mut self) -> Option<i32> {
        self.take(4).map(LittleEndian::read_i32)
    }

    pub fn read_u32(&mut self) -> Option<u32> {
        self.take(4).map(LittleEndian::read_u32)
    }

    pub fn read_f32(&mut self) -> Option<f32> {
        self.take(4).map(LittleEndian::read_f32)
    }

    pub fn read_f64(&mut self) -> Option<f64> {
        self.take(8).map(LittleEndian::read_f64)
    }

    /// Three consecutive `f64` values.
    pub fn read_f64_triple(&mut self) -> Option<(f64, f64, f64)> {
        let bytes = self.window(0, 24)?;
        let triple = (
            LittleEndian::read_f64(&bytes[0..8]),
            LittleEndian::read_f64(&bytes[8..16]),
            LittleEndian::read_f64(&bytes[16..24]),
        );
        self.pos += 24;
        Some(triple)
    }

    pub fn read_bytes(&mut self, n: usize) -> Option<Vec<u8>> {
        self.take(n).map(<[u8]>::to_vec)
    }

    /// Read `n` bytes as ASCII text with control characters trimmed from
    /// both ends.
    ///
    /// Bytes outside the ASCII range decode to nothing and are dropped; they
    /// are still consumed so the surrounding parse can continue.
    pub fn read_ascii_string(&mut self, n: usize) -> Option<String> {
        let bytes = self.take(n)?;
        Some(decode_ascii(bytes))
    }
}

/// Decode ASCII bytes, trimming control characters at both ends.
/// Each non-ASCII byte is skipped on its own.
pub fn decode_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect::<String>()
        .trim_matches(|c: char| c.is_ascii_control())
        .to_string()
}
