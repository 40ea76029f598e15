//! Lexer for rotate.
//!
//! Turns a [`SourceBuffer`](rot_lexer_core::SourceBuffer) into a
//! [`TokenList`](rot_ir::TokenList) in one left-to-right pass, or reports
//! the first lexical error with its span and line.
//!
//! ```text
//! SourceBuffer ──▶ Scanner ──▶ TokenList ──▶ parser
//!                     │
//!                     └──▶ LexError ──▶ diagnostic
//! ```

pub mod directives;
mod dump;
pub mod keywords;
mod lex_error;
mod scanner;

pub use directives::Directive;
pub use dump::TokenDump;
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::{
    lex, lex_with_warnings, LexOutput, Scanner, MAX_IDENTIFIER_LEN, MAX_NUMBER_LEN,
    MAX_STRING_LEN,
};
