//! Diagnostic reporting for rotate.
//!
//! A [`Diagnostic`] says what went wrong (code + message), where (span and
//! line) and how to fix it (advice). Emitters turn diagnostics into text:
//!
//! - [`TerminalEmitter`](emitter::TerminalEmitter): the source line with a
//!   caret underline, optionally colored
//! - [`JsonEmitter`](emitter::JsonEmitter): one JSON object per diagnostic
//!   for tooling

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Location, Severity};
pub use error_code::ErrorCode;
