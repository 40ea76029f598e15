//! Low-level source access for the rotate lexer.
//!
//! - [`SourceBuffer`]: immutable copy of a source file with a `0x00` sentinel
//!   and zero padding, so lookahead never needs a bounds check.
//! - [`Cursor`]: a cheap, [`Copy`] read position over that buffer.
//!
//! Nothing here knows about tokens; the scanner in `rot_lexer` drives the
//! cursor.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::{SourceBuffer, MAX_SOURCE_LEN};
