//! Hand-written single-pass scanner producing a [`TokenList`].
//!
//! The scanner walks a sentinel-terminated [`Cursor`] once, left to right.
//! Each dispatch skips spaces and newlines, records where the next token
//! starts, then branches on the first byte into a focused sub-scanner that
//! advances the cursor and either pushes a token or fails.
//!
//! The first failure stops the scan; there is no recovery. An over-long
//! string literal is the only non-fatal problem: it is collected as a
//! warning in [`LexOutput`] and the scan carries on.
//! The sentinel byte (`0x00`) ends the scan with a zero-length
//! `EndOfTokens` token.

use rot_ir::{Span, Token, TokenKind, TokenList};
use rot_lexer_core::{Cursor, SourceBuffer};
use tracing::{debug, trace, warn};

use crate::directives::Directive;
use crate::keywords;
use crate::lex_error::{LexError, LexErrorKind};

/// Identifiers longer than this many bytes are rejected.
pub const MAX_IDENTIFIER_LEN: u32 = 100;
/// Number literals longer than this many bytes are rejected.
pub const MAX_NUMBER_LEN: u32 = 100;
/// String literals longer than this (quotes included) are reported.
pub const MAX_STRING_LEN: u32 = 65_535;

/// Outcome of one dispatch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Step {
    /// A token was pushed or a comment skipped; keep going.
    Continue,
    /// `EndOfTokens` was pushed.
    Done,
}

/// Tokens from a successful scan, plus the non-fatal problems found on
/// the way.
#[derive(Clone, Debug)]
pub struct LexOutput {
    pub tokens: TokenList,
    /// Non-fatal problems, in source order.
    pub warnings: Vec<LexError>,
}

/// Scanner state for one pass over one source buffer.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Line of the cursor, 1-based.
    line: u32,
    /// Offset where the token being scanned begins.
    token_start: u32,
    /// Line where the token being scanned begins.
    token_line: u32,
    tokens: TokenList,
    warnings: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    /// Prepare a scanner over `source`.
    ///
    /// Token storage is reserved up front (one slot per two source bytes);
    /// if that reservation fails, or the source is too large for `u32`
    /// offsets, the result is `OutOfMemory`.
    pub fn new(source: &'a SourceBuffer) -> Result<Self, LexError> {
        if source.is_oversized() {
            return Err(LexError::new(LexErrorKind::OutOfMemory, Span::point(0), 1));
        }
        let capacity = (source.len() as usize / 2).max(1);
        let tokens = TokenList::try_with_capacity(capacity).map_err(|_| {
            LexError::new(LexErrorKind::OutOfMemory, Span::point(0), 1)
        })?;
        Ok(Self {
            cursor: source.cursor(),
            line: 1,
            token_start: 0,
            token_line: 1,
            tokens,
            warnings: Vec::new(),
        })
    }

    /// Scan to the end of input.
    ///
    /// On success the list always ends with exactly one `EndOfTokens`.
    pub fn run(mut self) -> Result<LexOutput, LexError> {
        while self.dispatch()? == Step::Continue {}
        Ok(LexOutput {
            tokens: self.tokens,
            warnings: self.warnings,
        })
    }

    fn dispatch(&mut self) -> Result<Step, LexError> {
        self.skip_whitespace();
        self.token_start = self.cursor.pos();
        self.token_line = self.line;

        match self.cursor.current() {
            b'0'..=b'9' => self.number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            b'"' => self.string(),
            b'\'' => self.char_literal(),
            b'@' => self.directive(),
            _ => self.symbol(),
        }
    }

    // ─── Helpers ───────────────────────────────────────────────────

    /// Advance one byte, counting it if it is a newline.
    #[inline]
    fn bump(&mut self) {
        if self.cursor.current() == b'\n' {
            self.line += 1;
        }
        self.cursor.advance();
    }

    #[inline]
    fn token_len(&self) -> u32 {
        self.cursor.pos() - self.token_start
    }

    /// Push a token spanning `token_start..pos`.
    #[inline]
    fn emit(&mut self, kind: TokenKind) -> Step {
        let span = Span::new(self.token_start, self.cursor.pos());
        trace!(?kind, %span, line = self.token_line, "token");
        self.tokens.push(Token::new(kind, span, self.token_line));
        Step::Continue
    }

    /// Error spanning the bytes consumed so far by the current token.
    #[cold]
    fn fail(&self, kind: LexErrorKind) -> LexError {
        LexError::new(
            kind,
            Span::new(self.token_start, self.cursor.pos()),
            self.token_line,
        )
    }

    /// Error spanning the consumed bytes plus the offending byte under the
    /// cursor, unless that byte is the sentinel.
    #[cold]
    fn fail_including_current(&self, kind: LexErrorKind) -> LexError {
        let mut end = self.cursor.pos();
        if self.cursor.current() != 0 {
            end += 1;
        }
        LexError::new(kind, Span::new(self.token_start, end), self.token_line)
    }

    // ─── Whitespace ────────────────────────────────────────────────

    fn skip_whitespace(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' => self.cursor.advance(),
                b'\n' => {
                    self.line += 1;
                    self.cursor.advance();
                }
                _ => return,
            }
        }
    }

    // ─── Identifiers & Keywords ────────────────────────────────────

    fn identifier(&mut self) -> Result<Step, LexError> {
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        if self.token_len() > MAX_IDENTIFIER_LEN {
            return Err(self.fail(LexErrorKind::IdentifierTooLong));
        }
        let kind = keywords::classify(self.cursor.slice_from(self.token_start));
        Ok(self.emit(kind))
    }

    // ─── Numbers ───────────────────────────────────────────────────

    /// Digits with at most one `.`; a second `.` ends the literal.
    fn number(&mut self) -> Result<Step, LexError> {
        let mut seen_dot = false;
        loop {
            match self.cursor.current() {
                b'0'..=b'9' => self.cursor.advance(),
                b'.' if !seen_dot => {
                    seen_dot = true;
                    self.cursor.advance();
                }
                _ => break,
            }
        }
        if self.token_len() > MAX_NUMBER_LEN {
            return Err(self.fail(LexErrorKind::NumberTooLong));
        }
        let kind = if seen_dot {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        Ok(self.emit(kind))
    }

    // ─── Strings ───────────────────────────────────────────────────

    /// A `"` preceded by `\` does not close the string. Escapes are not
    /// validated here.
    fn string(&mut self) -> Result<Step, LexError> {
        self.cursor.advance(); // opening '"'
        while !(self.cursor.current() == b'"' && self.cursor.past() != b'\\') {
            if self.cursor.current() == 0 {
                return Err(self.fail(LexErrorKind::StringNotClosed));
            }
            self.bump();
        }
        self.cursor.advance(); // closing '"'

        let len = self.token_len();
        if len > MAX_STRING_LEN {
            warn!(
                offset = self.token_start,
                line = self.token_line,
                len,
                "{}",
                LexErrorKind::StringTooLong.message()
            );
            self.warnings.push(self.fail(LexErrorKind::StringTooLong));
        }
        Ok(self.emit(TokenKind::String))
    }

    // ─── Char Literals ─────────────────────────────────────────────

    fn char_literal(&mut self) -> Result<Step, LexError> {
        self.cursor.advance(); // opening '\''
        let c = self.cursor.current();

        if c != b'\\' && c != 0 && self.cursor.peek() == b'\'' {
            self.bump();
            self.cursor.advance(); // closing '\''
            return Ok(self.emit(TokenKind::Char));
        }

        if c != b'\\' {
            return Err(self.fail(LexErrorKind::CharNotClosed));
        }

        self.cursor.advance(); // '\\'
        if !is_char_escape(self.cursor.current()) {
            return Err(self.fail_including_current(LexErrorKind::InvalidEscapeChar));
        }
        self.cursor.advance();
        if self.cursor.current() != b'\'' {
            return Err(self.fail(LexErrorKind::InvalidChar));
        }
        self.cursor.advance(); // closing '\''
        Ok(self.emit(TokenKind::Char))
    }

    // ─── Directives ────────────────────────────────────────────────

    /// `@` followed by a run of ASCII letters. The lexeme keeps the `@`.
    fn directive(&mut self) -> Result<Step, LexError> {
        self.cursor.advance(); // '@'
        self.cursor.eat_while(|b| b.is_ascii_alphabetic());
        let Some(directive) = Directive::from_lexeme(self.cursor.slice_from(self.token_start))
        else {
            return Err(self.fail(LexErrorKind::UnknownDirective));
        };
        trace!(%directive, "directive");
        Ok(self.emit(TokenKind::Directive))
    }

    // ─── Symbols ───────────────────────────────────────────────────

    fn symbol(&mut self) -> Result<Step, LexError> {
        let kind = match self.cursor.current() {
            0 => return Ok(self.end_of_input()),
            b'/' => return self.slash_or_comment(),
            b'(' => self.single(TokenKind::OpenParen),
            b')' => self.single(TokenKind::CloseParen),
            b'{' => self.single(TokenKind::OpenCurly),
            b'}' => self.single(TokenKind::CloseCurly),
            b'[' => self.single(TokenKind::OpenBracket),
            b']' => self.single(TokenKind::CloseBracket),
            b';' => self.single(TokenKind::SemiColon),
            b',' => self.single(TokenKind::Comma),
            b'.' => self.pair(b'.', TokenKind::Dot, TokenKind::DotDot),
            b':' => self.pair(b':', TokenKind::Colon, TokenKind::ColonColon),
            b'=' => self.pair(b'=', TokenKind::Equal, TokenKind::EqualEqual),
            b'!' => self.pair(b'=', TokenKind::Not, TokenKind::NotEqual),
            b'>' => self.pair(b'=', TokenKind::Greater, TokenKind::GreaterEqual),
            b'<' => self.pair(b'=', TokenKind::Less, TokenKind::LessEqual),
            b'+' => self.pair(b'=', TokenKind::Plus, TokenKind::PlusEqual),
            b'-' => self.pair(b'=', TokenKind::Minus, TokenKind::MinusEqual),
            b'*' => self.pair(b'=', TokenKind::Star, TokenKind::StarEqual),
            b'\t' => return Err(self.fail_including_current(LexErrorKind::Tab)),
            b'\r' => return Err(self.fail_including_current(LexErrorKind::CarriageReturn)),
            _ => return Err(self.fail_including_current(LexErrorKind::InvalidChar)),
        };
        Ok(self.emit(kind))
    }

    #[inline]
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// `first` alone, or `doubled` when the next byte is `second`.
    #[inline]
    fn pair(&mut self, second: u8, first: TokenKind, doubled: TokenKind) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current() == second {
            self.cursor.advance();
            doubled
        } else {
            first
        }
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn slash_or_comment(&mut self) -> Result<Step, LexError> {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.eat_until_newline_or_eof();
                Ok(Step::Continue)
            }
            b'*' => self.block_comment(),
            _ => {
                let kind = self.pair(b'=', TokenKind::Slash, TokenKind::SlashEqual);
                Ok(self.emit(kind))
            }
        }
    }

    /// Block comments do not nest. A `*/` directly preceded by `/` does not
    /// close the comment, so `/*/` never closes itself.
    fn block_comment(&mut self) -> Result<Step, LexError> {
        self.cursor.advance_n(2); // "/*"
        loop {
            match self.cursor.current() {
                0 => {
                    return Err(LexError::new(
                        LexErrorKind::CommentNotClosed,
                        Span::point(self.cursor.pos()),
                        self.line,
                    ));
                }
                b'*' if self.cursor.peek() == b'/' && self.cursor.past() != b'/' => {
                    self.cursor.advance_n(2);
                    return Ok(Step::Continue);
                }
                _ => self.bump(),
            }
        }
    }

    // ─── End of Input ──────────────────────────────────────────────

    fn end_of_input(&mut self) -> Step {
        if !self.cursor.is_eof() {
            warn!(
                offset = self.cursor.pos(),
                line = self.line,
                "NUL byte in source; ignoring the rest of the file"
            );
        }
        self.emit(TokenKind::EndOfTokens);
        Step::Done
    }
}

/// Bytes allowed after `\` in a char literal.
#[inline]
fn is_char_escape(b: u8) -> bool {
    matches!(b, b'n' | b't' | b'r' | b'b' | b'f' | b'\\' | b'\'')
}

/// Scan `source` into a token list.
///
/// On success the list is non-empty and ends with `EndOfTokens`. On failure
/// the error carries the kind, span and line of the first problem.
/// Warnings are dropped; use [`lex_with_warnings`] to keep them.
pub fn lex(source: &SourceBuffer) -> Result<TokenList, LexError> {
    lex_with_warnings(source).map(|output| output.tokens)
}

/// Like [`lex`], but also returns the non-fatal problems.
pub fn lex_with_warnings(source: &SourceBuffer) -> Result<LexOutput, LexError> {
    debug!(file = source.name(), bytes = source.len(), "lexing");
    let output = Scanner::new(source)?.run()?;
    debug!(
        file = source.name(),
        tokens = output.tokens.len(),
        warnings = output.warnings.len(),
        "lexed"
    );
    Ok(output)
}
