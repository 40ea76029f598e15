//! Token list: the ordered, append-only output of one scan.

use std::collections::TryReserveError;
use std::fmt;

use super::{Token, TokenKind};

/// Ordered token sequence; insertion order is source order.
///
/// A list produced by a successful scan always ends with exactly one
/// [`TokenKind::EndOfTokens`] token of length 0.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create a token list with pre-allocated capacity.
    ///
    /// Reports allocation failure instead of aborting, so the scanner can
    /// surface it as a lexer error.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut tokens = Vec::new();
        tokens.try_reserve(capacity)?;
        Ok(TokenList { tokens })
    }

    /// Append a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Get the number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Last token; the sentinel for a completed scan.
    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Get a slice of all tokens.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over tokens.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds in order. Mostly useful for tests and dumps.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenList({} tokens)", self.tokens.len())
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
