//! Zero-cost cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. The byte at
//! `source_len` is the `0x00` sentinel, followed by zero padding, so reads
//! at and slightly beyond the end of the source never fail.
//!
//! # Interior Null Bytes
//!
//! A null byte inside the source reads the same as the sentinel. Use
//! [`Cursor::is_eof`] to tell them apart: a null at `pos < source_len` is an
//! interior null, one at `pos >= source_len` is the sentinel.

/// Read position over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`]; the scanner keeps one by value.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`. This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte at `index`, or `0x00` past the padded buffer.
    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.buf.get(index).copied().unwrap_or(0)
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos as usize)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos as usize + 1)
    }

    /// Returns the byte just before the current position, or `0x00` at the
    /// start of the buffer.
    #[inline]
    pub fn past(&self) -> u8 {
        match self.pos.checked_sub(1) {
            Some(prev) => self.byte_at(prev as usize),
            None => 0,
        }
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached the sentinel.
    ///
    /// Interior null bytes are not EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Source bytes in `start..end`, clamped to the source content.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        let end = end.min(self.source_len) as usize;
        let start = (start as usize).min(end);
        &self.buf[start..end]
    }

    /// Source bytes from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel stops the loop. This
    /// holds for the ASCII classification predicates.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte or EOF using SIMD-accelerated search.
    ///
    /// The newline itself is not consumed. Used to skip line comments.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        if self.is_eof() {
            return;
        }
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }
}
