//! Lex-time problems.

use rot_diagnostic::{Diagnostic, ErrorCode};
use rot_lexer::{LexError, LexErrorKind};

/// Error code for each lexical failure category.
pub fn error_code(kind: LexErrorKind) -> ErrorCode {
    match kind {
        LexErrorKind::OutOfMemory => ErrorCode::E0001,
        LexErrorKind::InvalidChar => ErrorCode::E0002,
        LexErrorKind::IdentifierTooLong => ErrorCode::E0003,
        LexErrorKind::NumberTooLong => ErrorCode::E0004,
        LexErrorKind::StringTooLong => ErrorCode::E0005,
        LexErrorKind::Tab => ErrorCode::E0006,
        LexErrorKind::CarriageReturn => ErrorCode::E0007,
        LexErrorKind::CharNotClosed => ErrorCode::E0008,
        LexErrorKind::InvalidEscapeChar => ErrorCode::E0009,
        LexErrorKind::StringNotClosed => ErrorCode::E0010,
        LexErrorKind::EmptyFile => ErrorCode::E0011,
        LexErrorKind::UnexpectedEof => ErrorCode::E0012,
        LexErrorKind::BadTokenAtTopLevel => ErrorCode::E0013,
        LexErrorKind::CommentNotClosed => ErrorCode::E0014,
        LexErrorKind::UnknownDirective => ErrorCode::E0015,
        LexErrorKind::Unsupported => ErrorCode::E0016,
    }
}

/// Render a `LexError` into a `Diagnostic` with code, message, location
/// and advice.
///
/// Whole-file problems (`EmptyFile`, `OutOfMemory`) carry no location.
#[cold]
pub fn render_lex_error(err: &LexError) -> Diagnostic {
    let code = error_code(err.kind);
    let diag = if err.kind.is_fatal() {
        Diagnostic::error(code)
    } else {
        Diagnostic::warning(code)
    };
    let diag = diag
        .with_message(err.kind.message())
        .with_advice(err.kind.advice());

    match err.kind {
        LexErrorKind::EmptyFile | LexErrorKind::OutOfMemory => diag,
        _ => diag.with_location(err.span, err.line),
    }
}

#[cfg(test)]
mod tests;
