use std::collections::HashSet;

use pretty_assertions::assert_eq;
use rot_diagnostic::{Location, Severity};
use rot_ir::Span;

use super::*;

const ALL_KINDS: [LexErrorKind; 16] = [
    LexErrorKind::OutOfMemory,
    LexErrorKind::InvalidChar,
    LexErrorKind::IdentifierTooLong,
    LexErrorKind::NumberTooLong,
    LexErrorKind::StringTooLong,
    LexErrorKind::Tab,
    LexErrorKind::CarriageReturn,
    LexErrorKind::CharNotClosed,
    LexErrorKind::InvalidEscapeChar,
    LexErrorKind::StringNotClosed,
    LexErrorKind::EmptyFile,
    LexErrorKind::UnexpectedEof,
    LexErrorKind::BadTokenAtTopLevel,
    LexErrorKind::CommentNotClosed,
    LexErrorKind::UnknownDirective,
    LexErrorKind::Unsupported,
];

#[test]
fn every_kind_gets_a_distinct_code() {
    let codes: HashSet<ErrorCode> = ALL_KINDS.iter().map(|k| error_code(*k)).collect();
    assert_eq!(codes.len(), ALL_KINDS.len());
    assert_eq!(codes, ErrorCode::ALL.into_iter().collect());
}

#[test]
fn located_error() {
    let err = LexError::new(LexErrorKind::StringNotClosed, Span::new(4, 8), 3);
    let diag = render_lex_error(&err);
    assert_eq!(diag.code, ErrorCode::E0010);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.message, "string literal is not closed");
    assert_eq!(
        diag.location,
        Some(Location {
            span: Span::new(4, 8),
            line: 3
        })
    );
    assert_eq!(
        diag.advice.as_deref(),
        Some(LexErrorKind::StringNotClosed.advice())
    );
}

#[test]
fn whole_file_errors_have_no_location() {
    for kind in [LexErrorKind::EmptyFile, LexErrorKind::OutOfMemory] {
        let diag = render_lex_error(&LexError::new(kind, Span::point(0), 1));
        assert_eq!(diag.location, None, "{kind:?}");
    }
}

#[test]
fn string_too_long_is_a_warning() {
    let err = LexError::new(LexErrorKind::StringTooLong, Span::new(0, 70_000), 1);
    assert_eq!(render_lex_error(&err).severity, Severity::Warning);
}
