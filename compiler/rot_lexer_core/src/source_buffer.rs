//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner detects end of input by reading a NUL instead of checking
//! bounds. The total size is rounded up to a 64-byte boundary and always
//! leaves at least [`LOOKAHEAD_PAD`] zero bytes after the content, which
//! keeps `peek()` in bounds at the very end of the source.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Minimum number of zero bytes after the content: sentinel + two bytes of
/// lookahead + one spare.
const LOOKAHEAD_PAD: usize = 4;

/// Largest source, in bytes, whose offsets (sentinel and padding included)
/// all fit in a `u32`.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize - LOOKAHEAD_PAD;

/// Immutable source file contents plus its display name.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Display name, usually the path the bytes were loaded from.
    name: String,
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a buffer from UTF-8 source text.
    pub fn new(name: impl Into<String>, source: &str) -> Self {
        Self::from_bytes(name, source.as_bytes())
    }

    /// Create a buffer from raw file bytes.
    ///
    /// The bytes are not validated: the scanner only accepts ASCII outside
    /// string literals and comments, and reports anything else itself.
    ///
    /// Sources larger than [`MAX_SOURCE_LEN`] are accepted but `len()`
    /// saturates at `u32::MAX`. Callers check [`is_oversized`](Self::is_oversized)
    /// (or the length up front) and reject such input.
    pub fn from_bytes(name: impl Into<String>, source: &[u8]) -> Self {
        let source_len = source.len();
        let padded_len = (source_len + LOOKAHEAD_PAD + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Zero-filled, so the sentinel and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source);

        Self {
            name: name.into(),
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Display name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns `true` if the source is too large to scan with `u32` offsets.
    pub fn is_oversized(&self) -> bool {
        self.source_len as usize > MAX_SOURCE_LEN
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
