//! JSON Emitter
//!
//! Machine-readable diagnostic output: a JSON array with one object per
//! diagnostic. Positions are resolved against the source so tools get the
//! same line and column the terminal output shows.

use std::io::Write;

use crate::span_utils;
use crate::Diagnostic;

use super::{escape_json, DiagnosticEmitter};

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<'s, W: Write> {
    writer: W,
    first: bool,
    source: &'s [u8],
    file_path: String,
}

impl<'s, W: Write> JsonEmitter<'s, W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
            source: &[],
            file_path: String::from("<input>"),
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: &'s [u8]) -> Self {
        self.source = source;
        self
    }

    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = path.into();
        self
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = writeln!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        if self.first {
            let _ = writeln!(self.writer, "]");
        } else {
            let _ = writeln!(self.writer, "\n]");
        }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if !self.first {
            let _ = writeln!(self.writer, ",");
        }
        self.first = false;

        let _ = write!(
            self.writer,
            "  {{\"severity\": \"{}\", \"code\": \"{}\", \"message\": \"{}\", \"file\": \"{}\", ",
            diagnostic.severity,
            diagnostic.code.as_str(),
            escape_json(&diagnostic.message),
            escape_json(&self.file_path),
        );

        match diagnostic.location {
            Some(loc) => {
                let column = span_utils::column(self.source, loc.span.start);
                let _ = write!(
                    self.writer,
                    "\"line\": {}, \"column\": {column}, \"start\": {}, \"length\": {}, ",
                    loc.line,
                    loc.span.start,
                    loc.span.len()
                );
            }
            None => {
                let _ = write!(
                    self.writer,
                    "\"line\": null, \"column\": null, \"start\": null, \"length\": null, "
                );
            }
        }

        match &diagnostic.advice {
            Some(advice) => {
                let _ = write!(self.writer, "\"advice\": \"{}\"}}", escape_json(advice));
            }
            None => {
                let _ = write!(self.writer, "\"advice\": null}}");
            }
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {
        // The array is the summary.
    }
}
