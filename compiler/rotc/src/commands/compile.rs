//! `rotc <file>`: lex one file and report the outcome.

use std::io::{self, IsTerminal, Write};
use std::time::Instant;

use rot_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use rot_diagnostic::Diagnostic;
use rot_ir::Span;
use rot_lexer::{LexError, LexErrorKind, LexOutput, TokenDump};
use rot_lexer_core::{SourceBuffer, MAX_SOURCE_LEN};
use tracing::{debug, info};

use crate::options::{CompileOptions, ErrorFormat};
use crate::problem::render_lex_error;

use super::read_file;

/// Outcome of compiling one file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompileStatus {
    Success,
    Failed,
}

impl CompileStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            CompileStatus::Success => 0,
            CompileStatus::Failed => 1,
        }
    }
}

/// Read `options.path` and compile it, writing to the process streams.
pub fn compile_file(options: &CompileOptions) -> CompileStatus {
    let bytes = match read_file(&options.path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: {e}");
            return CompileStatus::Failed;
        }
    };
    let is_tty = io::stderr().is_terminal();
    compile_source(
        &options.path,
        &bytes,
        options,
        is_tty,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Compile in-memory source.
///
/// Token dumps go to `out`; diagnostics, timings and notes go to `err`.
pub fn compile_source(
    name: &str,
    bytes: &[u8],
    options: &CompileOptions,
    is_tty: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> CompileStatus {
    if bytes.is_empty() {
        let empty = LexError::new(LexErrorKind::EmptyFile, Span::point(0), 1);
        report(&[render_lex_error(&empty)], name, bytes, options, is_tty, err);
        return CompileStatus::Failed;
    }

    if let Err(too_large) = check_source_len(bytes.len()) {
        report(&[render_lex_error(&too_large)], name, bytes, options, is_tty, err);
        return CompileStatus::Failed;
    }

    let buffer = SourceBuffer::from_bytes(name, bytes);
    let start = Instant::now();
    let result = rot_lexer::lex_with_warnings(&buffer);
    let elapsed = start.elapsed();

    if options.timer {
        let _ = writeln!(err, "lexing {name} took {elapsed:.3?}");
    }

    match result {
        Ok(LexOutput { tokens, warnings }) => {
            debug!(file = name, tokens = tokens.len(), "lex succeeded");
            if !warnings.is_empty() {
                let diagnostics: Vec<Diagnostic> =
                    warnings.iter().map(render_lex_error).collect();
                report(&diagnostics, name, bytes, options, is_tty, err);
            }
            if options.dump_tokens {
                let _ = write!(out, "{}", TokenDump::new(&tokens, buffer.as_bytes()));
            }
            if !options.lex_only {
                info!(file = name, "no stages after lexing");
                let _ = writeln!(
                    err,
                    "note: parsing is not available yet; stopped after lexing {} tokens",
                    tokens.len()
                );
            }
            CompileStatus::Success
        }
        Err(e) => {
            debug!(file = name, kind = ?e.kind, span = %e.span, "lex failed");
            report(&[render_lex_error(&e)], name, bytes, options, is_tty, err);
            CompileStatus::Failed
        }
    }
}

/// Sources past [`MAX_SOURCE_LEN`] cannot be addressed with `u32` offsets
/// and are rejected before the buffer is built.
fn check_source_len(len: usize) -> Result<(), LexError> {
    if len > MAX_SOURCE_LEN {
        debug!(len, max = MAX_SOURCE_LEN, "source too large");
        return Err(LexError::new(LexErrorKind::OutOfMemory, Span::point(0), 1));
    }
    Ok(())
}

fn report(
    diagnostics: &[Diagnostic],
    name: &str,
    source: &[u8],
    options: &CompileOptions,
    is_tty: bool,
    err: &mut impl Write,
) {
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    let warnings = diagnostics.len() - errors;
    match options.error_format {
        ErrorFormat::Human => {
            let mut emitter = TerminalEmitter::with_color_mode(err, options.color, is_tty)
                .with_source(source)
                .with_file_path(name);
            for diagnostic in diagnostics {
                emitter.emit(diagnostic);
            }
            emitter.emit_summary(errors, warnings);
            emitter.flush();
        }
        ErrorFormat::Json => {
            let mut emitter = JsonEmitter::new(err)
                .with_source(source)
                .with_file_path(name);
            emitter.begin();
            for diagnostic in diagnostics {
                emitter.emit(diagnostic);
            }
            emitter.end();
            emitter.flush();
        }
    }
}
