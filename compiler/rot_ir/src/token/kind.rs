//! Token kinds for rotate.

use std::fmt;

/// Closed set of token kinds, with semantic range layout.
///
/// Token kinds carry no payload: the lexeme lives in the source buffer at the
/// token's span, so a kind fits in one byte.
///
/// | Range   | Category           |
/// |---------|--------------------|
/// | 0-5     | Literals, identifier, directive |
/// | 16-40   | Keywords           |
/// | 64-75   | Punctuation        |
/// | 96-111  | Operators          |
/// | 255     | End of tokens      |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Literals (0-15) ===
    Identifier = 0,
    /// `@col`, `@line`, `@file`, `@print`, `@println`
    Directive = 1,
    Integer = 2,
    Float = 3,
    String = 4,
    Char = 5,

    // === Keywords (16-63) ===
    Function = 16, // fn
    If = 17,
    In = 18,
    Or = 19,
    For = 20,
    Pub = 21,
    IntKeyword = 22, // int
    Ref = 23,
    And = 24,
    Nil = 25,
    Else = 26,
    Enum = 27,
    True = 28,
    CharKeyword = 29, // char
    BoolKeyword = 30, // bool
    UintKeyword = 31, // uint
    While = 32,
    False = 33,
    FloatKeyword = 34, // float
    Break = 35,
    Return = 36,
    Import = 37,
    Delete = 38,
    Struct = 39,
    Switch = 40,

    // === Punctuation (64-95) ===
    OpenParen = 64,    // (
    CloseParen = 65,   // )
    OpenCurly = 66,    // {
    CloseCurly = 67,   // }
    OpenBracket = 68,  // [
    CloseBracket = 69, // ]
    SemiColon = 70,    // ;
    Comma = 71,        // ,
    Dot = 72,          // .
    DotDot = 73,       // ..
    Colon = 74,        // :
    ColonColon = 75,   // ::

    // === Operators (96-127) ===
    Equal = 96,         // =
    EqualEqual = 97,    // ==
    Not = 98,           // !
    NotEqual = 99,      // !=
    Greater = 100,      // >
    GreaterEqual = 101, // >=
    Less = 102,         // <
    LessEqual = 103,    // <=
    Plus = 104,         // +
    PlusEqual = 105,    // +=
    Minus = 106,        // -
    MinusEqual = 107,   // -=
    Star = 108,         // *
    StarEqual = 109,    // *=
    Slash = 110,        // /
    SlashEqual = 111,   // /=

    // === Control ===
    /// Terminal sentinel; always zero-length and always last.
    EndOfTokens = 255,
}

impl TokenKind {
    /// Fixed source text for kinds that are always spelled the same way.
    ///
    /// Returns `None` for identifiers, directives, literals and the sentinel,
    /// whose text has to be read from the source buffer.
    pub const fn fixed_lexeme(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Identifier
            | TokenKind::Directive
            | TokenKind::Integer
            | TokenKind::Float
            | TokenKind::String
            | TokenKind::Char
            | TokenKind::EndOfTokens => return None,

            TokenKind::Function => "fn",
            TokenKind::If => "if",
            TokenKind::In => "in",
            TokenKind::Or => "or",
            TokenKind::For => "for",
            TokenKind::Pub => "pub",
            TokenKind::IntKeyword => "int",
            TokenKind::Ref => "ref",
            TokenKind::And => "and",
            TokenKind::Nil => "nil",
            TokenKind::Else => "else",
            TokenKind::Enum => "enum",
            TokenKind::True => "true",
            TokenKind::CharKeyword => "char",
            TokenKind::BoolKeyword => "bool",
            TokenKind::UintKeyword => "uint",
            TokenKind::While => "while",
            TokenKind::False => "false",
            TokenKind::FloatKeyword => "float",
            TokenKind::Break => "break",
            TokenKind::Return => "return",
            TokenKind::Import => "import",
            TokenKind::Delete => "delete",
            TokenKind::Struct => "struct",
            TokenKind::Switch => "switch",

            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::SemiColon => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::Colon => ":",
            TokenKind::ColonColon => "::",

            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Not => "!",
            TokenKind::NotEqual => "!=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Plus => "+",
            TokenKind::PlusEqual => "+=",
            TokenKind::Minus => "-",
            TokenKind::MinusEqual => "-=",
            TokenKind::Star => "*",
            TokenKind::StarEqual => "*=",
            TokenKind::Slash => "/",
            TokenKind::SlashEqual => "/=",
        };
        Some(text)
    }

    /// Plain-text name used by token dumps and diagnostics.
    pub const fn describe(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Directive => "directive",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Char => "char",

            TokenKind::Function => "keyword 'fn'",
            TokenKind::If => "keyword 'if'",
            TokenKind::In => "keyword 'in'",
            TokenKind::Or => "keyword 'or'",
            TokenKind::For => "keyword 'for'",
            TokenKind::Pub => "keyword 'pub'",
            TokenKind::IntKeyword => "keyword 'int'",
            TokenKind::Ref => "keyword 'ref'",
            TokenKind::And => "keyword 'and'",
            TokenKind::Nil => "keyword 'nil'",
            TokenKind::Else => "keyword 'else'",
            TokenKind::Enum => "keyword 'enum'",
            TokenKind::True => "keyword 'true'",
            TokenKind::CharKeyword => "keyword 'char'",
            TokenKind::BoolKeyword => "keyword 'bool'",
            TokenKind::UintKeyword => "keyword 'uint'",
            TokenKind::While => "keyword 'while'",
            TokenKind::False => "keyword 'false'",
            TokenKind::FloatKeyword => "keyword 'float'",
            TokenKind::Break => "keyword 'break'",
            TokenKind::Return => "keyword 'return'",
            TokenKind::Import => "keyword 'import'",
            TokenKind::Delete => "keyword 'delete'",
            TokenKind::Struct => "keyword 'struct'",
            TokenKind::Switch => "keyword 'switch'",

            TokenKind::OpenParen => "open paren",
            TokenKind::CloseParen => "close paren",
            TokenKind::OpenCurly => "open curly brace",
            TokenKind::CloseCurly => "close curly brace",
            TokenKind::OpenBracket => "open square bracket",
            TokenKind::CloseBracket => "close square bracket",
            TokenKind::SemiColon => "semicolon",
            TokenKind::Comma => "comma",
            TokenKind::Dot => "dot",
            TokenKind::DotDot => "range '..'",
            TokenKind::Colon => "colon",
            TokenKind::ColonColon => "double colon",

            TokenKind::Equal => "equal",
            TokenKind::EqualEqual => "equal equal",
            TokenKind::Not => "not",
            TokenKind::NotEqual => "not equal",
            TokenKind::Greater => "greater",
            TokenKind::GreaterEqual => "greater or equal",
            TokenKind::Less => "less",
            TokenKind::LessEqual => "less or equal",
            TokenKind::Plus => "plus",
            TokenKind::PlusEqual => "plus equal",
            TokenKind::Minus => "minus",
            TokenKind::MinusEqual => "minus equal",
            TokenKind::Star => "star",
            TokenKind::StarEqual => "star equal",
            TokenKind::Slash => "slash",
            TokenKind::SlashEqual => "slash equal",

            TokenKind::EndOfTokens => "end of tokens",
        }
    }

    /// Kinds whose lexeme length depends on the source text.
    #[inline]
    pub const fn is_length_variable(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Directive
                | TokenKind::Integer
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::Char
        )
    }

    #[inline]
    pub const fn is_number(self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::Float)
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        let tag = self as u8;
        tag >= TokenKind::Function as u8 && tag <= TokenKind::Switch as u8
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
