//! Lexer error types.
//!
//! A scan stops at the first error. The error records what went wrong and
//! where: the byte span of the offending text and the 1-based line of its
//! first byte. Rendering into a human-readable message happens in `rotc`.

use std::fmt;

use rot_ir::Span;

/// A lexer failure with its source position.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHERE: the offending bytes. May be empty (e.g. at end of input).
    pub span: Span,
    /// Line of `span.start`, 1-based.
    pub line: u32,
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, span: Span, line: u32) -> Self {
        Self { kind, span, line }
    }
}

/// Closed set of lexical error categories.
///
/// The scanner itself produces the character-level kinds. `EmptyFile`,
/// `UnexpectedEof`, `BadTokenAtTopLevel` and `Unsupported` are raised by the
/// driver and later stages but share this taxonomy so that every front-end
/// failure renders the same way.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Token storage could not be allocated.
    OutOfMemory,
    /// A byte that starts no token.
    InvalidChar,
    /// Identifier longer than 100 bytes.
    IdentifierTooLong,
    /// Number literal longer than 100 bytes.
    NumberTooLong,
    /// String literal longer than 65535 bytes. Reported, never fatal.
    StringTooLong,
    /// Tab character outside a literal or comment.
    Tab,
    /// Carriage return outside a literal or comment.
    CarriageReturn,
    /// Char literal without its closing `'`.
    CharNotClosed,
    /// `\x` in a char literal where `x` is not a known escape.
    InvalidEscapeChar,
    /// String literal without its closing `"`.
    StringNotClosed,
    /// The source file has no content.
    EmptyFile,
    /// Input ended where more tokens were required.
    UnexpectedEof,
    /// Token not allowed at the top level of a file.
    BadTokenAtTopLevel,
    /// `/*` without a matching `*/`.
    CommentNotClosed,
    /// `@name` where `name` is not a known directive.
    UnknownDirective,
    /// Recognised but not yet supported construct.
    Unsupported,
}

impl LexErrorKind {
    /// One-line description of the failure.
    pub const fn message(self) -> &'static str {
        match self {
            LexErrorKind::OutOfMemory => "out of memory while lexing",
            LexErrorKind::InvalidChar => "invalid character",
            LexErrorKind::IdentifierTooLong => "identifier is too long",
            LexErrorKind::NumberTooLong => "number literal is too long",
            LexErrorKind::StringTooLong => "string literal is too long",
            LexErrorKind::Tab => "tab character found",
            LexErrorKind::CarriageReturn => "carriage return found",
            LexErrorKind::CharNotClosed => "character literal is not closed",
            LexErrorKind::InvalidEscapeChar => "invalid escape character",
            LexErrorKind::StringNotClosed => "string literal is not closed",
            LexErrorKind::EmptyFile => "file is empty",
            LexErrorKind::UnexpectedEof => "unexpected end of file",
            LexErrorKind::BadTokenAtTopLevel => "token is not allowed at the top level",
            LexErrorKind::CommentNotClosed => "block comment is not closed",
            LexErrorKind::UnknownDirective => "unknown directive",
            LexErrorKind::Unsupported => "unsupported construct",
        }
    }

    /// Actionable hint shown under the source snippet.
    pub const fn advice(self) -> &'static str {
        match self {
            LexErrorKind::OutOfMemory => "free some memory or split the file into smaller files",
            LexErrorKind::InvalidChar => {
                "remove this character; only ASCII letters, digits, `_` and operators are allowed"
            }
            LexErrorKind::IdentifierTooLong => "identifiers can be at most 100 characters long",
            LexErrorKind::NumberTooLong => "number literals can be at most 100 digits long",
            LexErrorKind::StringTooLong => "string literals can be at most 65535 bytes long",
            LexErrorKind::Tab => "replace tabs with spaces",
            LexErrorKind::CarriageReturn => {
                "convert line endings to `\\n` (LF); `\\r` is not allowed"
            }
            LexErrorKind::CharNotClosed => {
                "a character literal holds exactly one character followed by `'`"
            }
            LexErrorKind::InvalidEscapeChar => {
                "valid escapes are: \\n, \\t, \\r, \\b, \\f, \\\\, \\'"
            }
            LexErrorKind::StringNotClosed => "add a closing `\"` to the string",
            LexErrorKind::EmptyFile => "add some code to the file",
            LexErrorKind::UnexpectedEof => "the file ended early; check for missing tokens",
            LexErrorKind::BadTokenAtTopLevel => {
                "only declarations and imports are allowed at the top level"
            }
            LexErrorKind::CommentNotClosed => "add `*/` to close the block comment",
            LexErrorKind::UnknownDirective => {
                "known directives are: @col, @line, @file, @print, @println"
            }
            LexErrorKind::Unsupported => "this feature is not supported yet",
        }
    }

    /// Whether this failure stops the scan.
    ///
    /// An over-long string literal is only reported; every other kind halts.
    pub const fn is_fatal(self) -> bool {
        !matches!(self, LexErrorKind::StringTooLong)
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
