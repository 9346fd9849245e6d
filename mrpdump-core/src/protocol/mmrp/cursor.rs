//! Bounds-checked read cursor shared by every MMRP reader.
//!
//! Each reader takes `&mut Cursor`, consumes exactly the bytes of its record
//! and leaves the cursor on the first byte of the next one. A failed read
//! reports [`ProtocolError::Truncated`] and does not move the cursor.

use crate::error::ProtocolError;

/// Half-open byte range `[start, end)` into the decoded buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn as_range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// One immutable buffer and one forward-only position.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Start reading `buf` at byte `start`.
    pub fn new(buf: &'a [u8], start: usize) -> Self {
        Self { buf, pos: start }
    }

    /// Absolute position of the next unread byte.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the position and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Span from `start` up to the current position.
    #[inline]
    pub fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.pos)
    }

    fn ensure(&self, needed: usize) -> Result<(), ProtocolError> {
        let available = self.remaining();
        if available < needed || self.pos > self.buf.len() {
            return Err(ProtocolError::Truncated {
                offset: self.pos,
                needed,
                available,
            });
        }
        Ok(())
    }

    /// Read a big-endian u16 without advancing.
    pub fn peek_u16(&self) -> Result<u16, ProtocolError> {
        self.ensure(2)?;
        Ok(u16::from_be_bytes([self.buf[self.pos], self.buf[self.pos + 1]]))
    }

    pub fn read_u8(&mut self) -> Result<u8, ProtocolError> {
        self.ensure(1)?;
        let value = self.buf[self.pos];
        self.pos += 1;
        Ok(value)
    }

    pub fn read_u16(&mut self) -> Result<u16, ProtocolError> {
        let value = self.peek_u16()?;
        self.pos += 2;
        Ok(value)
    }

    /// Borrow the next `n` bytes and advance past them.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], ProtocolError> {
        self.ensure(n)?;
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..self.pos])
    }

    pub fn skip(&mut self, n: usize) -> Result<(), ProtocolError> {
        self.ensure(n)?;
        self.pos += n;
        Ok(())
    }
}
