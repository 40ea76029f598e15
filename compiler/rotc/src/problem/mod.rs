//! Problem rendering: turning stage errors into [`Diagnostic`]s.
//!
//! Each compiler stage reports failures in its own error type; this module
//! owns the mapping to error codes, messages and advice.
//!
//! [`Diagnostic`]: rot_diagnostic::Diagnostic

pub mod lex;

pub use lex::render_lex_error;
