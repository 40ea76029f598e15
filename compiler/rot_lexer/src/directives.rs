//! Compiler directives: `@col`, `@line`, `@file`, `@print`, `@println`.
//!
//! The scanner emits a single `Directive` token whose lexeme includes the
//! `@`. Which directive it is can be recovered from the lexeme with
//! [`Directive::from_lexeme`].

use std::fmt;

/// A known directive name.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Directive {
    Col,
    Line,
    File,
    Print,
    Println,
}

impl Directive {
    pub const ALL: [Directive; 5] = [
        Directive::Col,
        Directive::Line,
        Directive::File,
        Directive::Print,
        Directive::Println,
    ];

    /// Resolve a directive name (the text after `@`).
    pub fn lookup(name: &[u8]) -> Option<Directive> {
        match name {
            b"col" => Some(Directive::Col),
            b"line" => Some(Directive::Line),
            b"file" => Some(Directive::File),
            b"print" => Some(Directive::Print),
            b"println" => Some(Directive::Println),
            _ => None,
        }
    }

    /// Resolve a full directive lexeme such as `@println`.
    pub fn from_lexeme(lexeme: &[u8]) -> Option<Directive> {
        lexeme.strip_prefix(b"@").and_then(Directive::lookup)
    }

    /// Name without the leading `@`.
    pub const fn name(self) -> &'static str {
        match self {
            Directive::Col => "col",
            Directive::Line => "line",
            Directive::File => "file",
            Directive::Print => "print",
            Directive::Println => "println",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name())
    }
}
