//! Keyword classification.
//!
//! Every identifier-shaped run is checked against the 25 reserved words.
//! The lookup buckets on length first (keywords are 2-6 bytes long), so
//! most identifiers are rejected without a single comparison.

use rot_ir::TokenKind;

/// Classify an identifier-shaped run as a keyword or `Identifier`.
///
/// Matching is exact and case-sensitive: `If`, `fnx` and `f` are all
/// identifiers.
#[inline]
pub fn classify(text: &[u8]) -> TokenKind {
    lookup(text).unwrap_or(TokenKind::Identifier)
}

/// Look up a reserved word by text, `None` for plain identifiers.
#[inline]
pub fn lookup(text: &[u8]) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            b"fn" => Some(TokenKind::Function),
            b"if" => Some(TokenKind::If),
            b"in" => Some(TokenKind::In),
            b"or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            b"for" => Some(TokenKind::For),
            b"pub" => Some(TokenKind::Pub),
            b"int" => Some(TokenKind::IntKeyword),
            b"ref" => Some(TokenKind::Ref),
            b"and" => Some(TokenKind::And),
            b"nil" => Some(TokenKind::Nil),
            _ => None,
        },
        4 => match text {
            b"else" => Some(TokenKind::Else),
            b"enum" => Some(TokenKind::Enum),
            b"true" => Some(TokenKind::True),
            b"char" => Some(TokenKind::CharKeyword),
            b"bool" => Some(TokenKind::BoolKeyword),
            b"uint" => Some(TokenKind::UintKeyword),
            _ => None,
        },
        5 => match text {
            b"while" => Some(TokenKind::While),
            b"false" => Some(TokenKind::False),
            b"float" => Some(TokenKind::FloatKeyword),
            b"break" => Some(TokenKind::Break),
            _ => None,
        },
        6 => match text {
            b"return" => Some(TokenKind::Return),
            b"import" => Some(TokenKind::Import),
            b"delete" => Some(TokenKind::Delete),
            b"struct" => Some(TokenKind::Struct),
            b"switch" => Some(TokenKind::Switch),
            _ => None,
        },
        _ => None,
    }
}
