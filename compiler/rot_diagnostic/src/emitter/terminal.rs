//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support:
//!
//! ```text
//! > main.rot:2:5: error[E0002]: invalid character
//!  2 | y = $
//!    |     ^
//! > Advice: remove this character
//! ```

use std::io::{self, Write};

use crate::span_utils;
use crate::{Diagnostic, Location, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Spans longer than this get [`TRUNCATED_UNDERLINE`] instead of one caret
/// per byte.
pub const MAX_UNDERLINE: u32 = 100;
pub const TRUNCATED_UNDERLINE: &str = "^^^---...";

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Caret run for a span of `len` bytes. Zero-length spans get one caret.
fn underline(len: u32) -> String {
    if len > MAX_UNDERLINE {
        TRUNCATED_UNDERLINE.to_owned()
    } else {
        "^".repeat(len.max(1) as usize)
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
///
/// Without a source buffer the snippet lines are skipped and only the
/// header and advice are printed.
pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    source: &'s [u8],
    file_path: String,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: &[],
            file_path: String::from("<input>"),
        }
    }

    /// Source the diagnostics' spans index into.
    #[must_use]
    pub fn with_source(mut self, source: &'s [u8]) -> Self {
        self.source = source;
        self
    }

    /// File name shown in the header.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = path.into();
        self
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        }
    }

    fn write_header(&mut self, diagnostic: &Diagnostic) {
        let _ = write!(self.writer, "> ");
        let position = match diagnostic.location {
            Some(loc) => format!(
                "{}:{}:{}",
                self.file_path,
                loc.line,
                span_utils::column(self.source, loc.span.start)
            ),
            None => self.file_path.clone(),
        };
        self.write_colored(&position, colors::BOLD);
        let _ = write!(self.writer, ": ");
        self.write_colored(
            &diagnostic.severity.to_string(),
            Self::severity_color(diagnostic.severity),
        );
        self.write_colored(&format!("[{}]", diagnostic.code.as_str()), colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);
    }

    /// Source line plus caret underline.
    fn write_snippet(&mut self, loc: Location, severity: Severity) {
        let source = self.source;
        let text = span_utils::line_text(source, loc.span.start);
        let col = span_utils::column(source, loc.span.start) as usize;
        let gutter = span_utils::digit_count(loc.line);

        self.write_colored(&format!(" {} |", loc.line), colors::SECONDARY);
        let _ = writeln!(self.writer, " {}", String::from_utf8_lossy(text));

        // Tabs before the column are echoed so the carets stay aligned.
        let indent: String = text
            .iter()
            .take(col - 1)
            .map(|&b| if b == b'\t' { '\t' } else { ' ' })
            .collect();
        self.write_colored(&format!(" {:gutter$} |", ""), colors::SECONDARY);
        let _ = write!(self.writer, " {indent}");
        self.write_colored(&underline(loc.span.len()), Self::severity_color(severity));
        let _ = writeln!(self.writer);
    }
}

impl<'s> TerminalEmitter<'s, io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_header(diagnostic);

        if let Some(loc) = diagnostic.location {
            if !self.source.is_empty() {
                self.write_snippet(loc, diagnostic.severity);
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        if let Some(advice) = &diagnostic.advice {
            let _ = write!(self.writer, "> ");
            self.write_colored("Advice", colors::HELP);
            let _ = writeln!(self.writer, ": {advice}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count == 0 && warning_count == 0 {
            return;
        }

        if error_count > 0 {
            self.write_colored("error", colors::ERROR);

            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };

            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {} warning{} emitted",
                    warning_count,
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {} warning{} emitted",
                warning_count,
                plural_s(warning_count)
            );
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
