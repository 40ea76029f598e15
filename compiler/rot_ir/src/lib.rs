//! Rotate IR - types shared between compiler stages.
//!
//! - Spans for source locations
//! - Tokens, token kinds and `TokenList` for lexer output
//!
//! Tokens never copy lexeme text: a token's span indexes into the source
//! buffer it was scanned from, so that buffer must outlive the token list.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
