//! Human-readable token listing for `--debug` output.

use std::fmt;

use rot_ir::TokenList;

/// Displays one token per line as `kind 'lexeme' line N`.
///
/// Lexemes are shown lossily; invalid UTF-8 becomes U+FFFD.
pub struct TokenDump<'a> {
    tokens: &'a TokenList,
    source: &'a [u8],
}

impl<'a> TokenDump<'a> {
    /// `source` must be the buffer `tokens` were scanned from.
    pub fn new(tokens: &'a TokenList, source: &'a [u8]) -> Self {
        Self { tokens, source }
    }
}

impl fmt::Display for TokenDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.tokens {
            let text = String::from_utf8_lossy(token.text(self.source));
            writeln!(
                f,
                "{:<22} '{}' line {}",
                token.kind.describe(),
                text.escape_debug(),
                token.line
            )?;
        }
        Ok(())
    }
}
