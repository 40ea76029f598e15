//! Rotate compiler driver.
//!
//! ```text
//! file bytes
//!     │
//!     ▼
//! SourceBuffer ──► rot_lexer::lex_with_warnings ──► TokenList ──► (--debug dump)
//!                        │
//!                        ▼
//!            LexError (fatal, or warnings) ──► render_lex_error ──► emitter
//! ```
//!
//! Lexing is the only stage so far; the driver stops after it.

pub mod commands;
pub mod options;
pub mod problem;
pub mod tracing_setup;
