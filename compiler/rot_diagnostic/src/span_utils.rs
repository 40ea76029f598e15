//! Line and column lookup over raw source bytes.
//!
//! Diagnostics are rare, so nothing is precomputed: each lookup searches
//! backward and forward from the offset with `memchr`.

use memchr::{memchr, memchr_iter, memrchr};

/// Byte range of the line containing `offset`, newline excluded.
///
/// `offset` is clamped to the source length, so an end-of-input offset
/// resolves to the last line (which is empty if the source ends in `\n`).
pub fn line_bounds(source: &[u8], offset: u32) -> (usize, usize) {
    let offset = (offset as usize).min(source.len());
    let start = memrchr(b'\n', &source[..offset]).map_or(0, |i| i + 1);
    let end = memchr(b'\n', &source[start..]).map_or(source.len(), |i| start + i);
    (start, end)
}

/// 1-based byte column of `offset` on its line.
pub fn column(source: &[u8], offset: u32) -> u32 {
    let (start, _) = line_bounds(source, offset);
    let offset = (offset as usize).min(source.len());
    u32::try_from(offset - start).unwrap_or(u32::MAX - 1) + 1
}

/// Text of the line containing `offset`, newline excluded.
pub fn line_text(source: &[u8], offset: u32) -> &[u8] {
    let (start, end) = line_bounds(source, offset);
    &source[start..end]
}

/// 1-based line number of `offset`, counting newlines before it.
pub fn line_from_offset(source: &[u8], offset: u32) -> u32 {
    let offset = (offset as usize).min(source.len());
    let newlines = memchr_iter(b'\n', &source[..offset]).count();
    u32::try_from(newlines).unwrap_or(u32::MAX - 1) + 1
}

/// Number of decimal digits in `n`, used to align the gutter.
pub fn digit_count(n: u32) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

#[cfg(test)]
mod tests;
