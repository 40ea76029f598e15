use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where the first digit is the phase. Only the lexer phase
/// (E0xxx) exists so far.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Out of memory while building the token list
    E0001,
    /// Invalid character in source
    E0002,
    /// Identifier longer than 100 bytes
    E0003,
    /// Number literal longer than 100 bytes
    E0004,
    /// String literal longer than 65535 bytes (warning)
    E0005,
    /// Tab character
    E0006,
    /// Carriage return
    E0007,
    /// Unterminated character literal
    E0008,
    /// Invalid escape in a character literal
    E0009,
    /// Unterminated string literal
    E0010,
    /// Empty source file
    E0011,
    /// Unexpected end of file
    E0012,
    /// Token not allowed at the top level
    E0013,
    /// Unterminated block comment
    E0014,
    /// Unknown `@` directive
    E0015,
    /// Unsupported construct
    E0016,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 16] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E0008,
        ErrorCode::E0009,
        ErrorCode::E0010,
        ErrorCode::E0011,
        ErrorCode::E0012,
        ErrorCode::E0013,
        ErrorCode::E0014,
        ErrorCode::E0015,
        ErrorCode::E0016,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
            ErrorCode::E0009 => "E0009",
            ErrorCode::E0010 => "E0010",
            ErrorCode::E0011 => "E0011",
            ErrorCode::E0012 => "E0012",
            ErrorCode::E0013 => "E0013",
            ErrorCode::E0014 => "E0014",
            ErrorCode::E0015 => "E0015",
            ErrorCode::E0016 => "E0016",
        }
    }

    /// Check if this is a lexer error (E0xxx).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
