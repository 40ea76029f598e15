//! Command handlers for the `rotc` CLI.
//!
//! Shared utilities like `read_file` live here in the module root.

use std::io;

mod compile;

pub use compile::{compile_file, compile_source, CompileStatus};

/// Failure to load an input file.
#[derive(Debug, thiserror::Error)]
pub enum ReadFileError {
    #[error("cannot find file '{0}'")]
    NotFound(String),
    #[error("permission denied reading '{0}'")]
    PermissionDenied(String),
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Read a source file as raw bytes.
///
/// The lexer works on bytes, so invalid UTF-8 is not an error here; it
/// surfaces as `InvalidChar` at the offending byte instead.
pub fn read_file(path: &str) -> Result<Vec<u8>, ReadFileError> {
    std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReadFileError::NotFound(path.to_string()),
        io::ErrorKind::PermissionDenied => ReadFileError::PermissionDenied(path.to_string()),
        _ => ReadFileError::Io {
            path: path.to_string(),
            source: e,
        },
    })
}
