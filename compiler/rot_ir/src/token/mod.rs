//! Token types for the rotate lexer.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use super::Span;

/// A token: kind, byte span into the source buffer, and 1-based line of its
/// first byte.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, line: u32) -> Self {
        Token { kind, span, line }
    }

    /// Lexeme length in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.span.len()
    }

    /// True only for the end-of-tokens sentinel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// The lexeme bytes, sliced out of the buffer this token was scanned from.
    ///
    /// Returns an empty slice if the span does not fit `source`.
    #[inline]
    pub fn text<'s>(&self, source: &'s [u8]) -> &'s [u8] {
        source.get(self.span.to_range()).unwrap_or_default()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {} (line {})", self.kind, self.span, self.line)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    // kind (1) + padding (3) + span (8) + line (4)
    crate::static_assert_size!(Token, 16);
    crate::static_assert_size!(TokenKind, 1);
}
