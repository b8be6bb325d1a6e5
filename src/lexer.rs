//! SQL lexer for tokenizing input.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// The closed set of lexical categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // Keywords
    /// `SELECT` keyword.
    Select,
    /// `FROM` keyword.
    From,
    /// `INSERT` keyword.
    Insert,
    /// `INTO` keyword.
    Into,
    /// `VALUES` keyword.
    Values,
    /// `UPDATE` keyword.
    Update,
    /// `DELETE` keyword.
    Delete,
    /// `SET` keyword.
    Set,
    /// `WHERE` keyword.
    Where,

    // Identifiers and literals
    /// A bare identifier: any flushed literal that is neither a keyword nor
    /// a number.
    Ident,
    /// A quoted string literal, delimiters included.
    String,
    /// A numeric literal, carried as raw text.
    Number,

    // Symbols
    /// Comma.
    Comma,
    /// Left parenthesis.
    LParen,
    /// Right parenthesis.
    RParen,
    /// Equals sign.
    Equals,
    /// Semicolon, a statement separator.
    Semicolon,
    /// Newline, a statement separator.
    Endline,
}

impl TokenKind {
    /// Whether this token separates statements (newline or semicolon).
    #[must_use]
    pub const fn is_separator(self) -> bool {
        matches!(self, Self::Endline | Self::Semicolon)
    }

    /// Whether this token is accepted in a value position: string literals,
    /// numeric literals, and bare identifiers are all interchangeable there.
    #[must_use]
    pub const fn is_value(self) -> bool {
        matches!(self, Self::String | Self::Number | Self::Ident)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Set => "SET",
            Self::Where => "WHERE",
            Self::Ident => "IDENT",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Comma => ",",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Equals => "=",
            Self::Semicolon => ";",
            Self::Endline => "ENDLINE",
        })
    }
}

/// A token produced by the lexer: a category plus the exact source text it
/// covers. String literals keep their surrounding quotes; keywords keep
/// their original casing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The lexical category.
    pub kind: TokenKind,
    /// The exact source substring.
    pub literal: String,
}

impl Token {
    /// Create a token from its category and literal text.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }
}

/// Accumulate-then-flush tokenizer state, owned by a single [`tokenize`]
/// call.
struct Lexer {
    tokens: Vec<Token>,
    buffer: String,
    /// The opening quote of the string literal currently being read, if any.
    delimiter: Option<char>,
}

impl Lexer {
    /// Convert the pending buffer into a token. An empty buffer flushes to
    /// nothing.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let literal = core::mem::take(&mut self.buffer);
        let kind = if is_number_literal(&literal) {
            TokenKind::Number
        } else {
            keyword(&literal).unwrap_or(TokenKind::Ident)
        };
        self.tokens.push(Token { kind, literal });
    }

    /// Flush the pending buffer, then emit a single-character token.
    fn symbol(&mut self, kind: TokenKind, literal: &str) {
        self.flush();
        self.tokens.push(Token::new(kind, literal));
    }
}

/// Case-insensitive keyword lookup. The token literal keeps the original
/// casing; only the classification ignores case.
fn keyword(literal: &str) -> Option<TokenKind> {
    Some(match literal.to_uppercase().as_str() {
        "SELECT" => TokenKind::Select,
        "FROM" => TokenKind::From,
        "INSERT" => TokenKind::Insert,
        "INTO" => TokenKind::Into,
        "VALUES" => TokenKind::Values,
        "UPDATE" => TokenKind::Update,
        "DELETE" => TokenKind::Delete,
        "SET" => TokenKind::Set,
        "WHERE" => TokenKind::Where,
        _ => return None,
    })
}

/// Whether a flushed literal is a numeric literal: an optional leading `-`,
/// at least one digit, at most one `.`, and nothing else. No numeric parsing
/// happens here; the literal text is carried unchanged.
fn is_number_literal(literal: &str) -> bool {
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    let mut seen_digit = false;
    let mut seen_dot = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

/// Tokenize raw input into an ordered token sequence.
///
/// Total: this never fails, and malformed input degrades to [`TokenKind::Ident`]
/// tokens rather than errors. Inside a string literal every character is
/// accumulated verbatim, so commas, parens, and whitespace between quotes are
/// data; a quote character that differs from the opening delimiter is data
/// too. An unterminated string consumes to end of input and produces no
/// token at all; the pending buffer is dropped.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer {
        tokens: Vec::new(),
        buffer: String::new(),
        delimiter: None,
    };

    for c in input.chars() {
        if c == '\'' || c == '"' {
            match lexer.delimiter {
                None => {
                    lexer.flush();
                    lexer.delimiter = Some(c);
                    lexer.buffer.push(c);
                }
                Some(open) if open == c => {
                    lexer.buffer.push(c);
                    let literal = core::mem::take(&mut lexer.buffer);
                    lexer.tokens.push(Token {
                        kind: TokenKind::String,
                        literal,
                    });
                    lexer.delimiter = None;
                }
                Some(_) => lexer.buffer.push(c),
            }
            continue;
        }

        if lexer.delimiter.is_some() {
            lexer.buffer.push(c);
            continue;
        }

        match c {
            ',' => lexer.symbol(TokenKind::Comma, ","),
            '(' => lexer.symbol(TokenKind::LParen, "("),
            ')' => lexer.symbol(TokenKind::RParen, ")"),
            '=' => lexer.symbol(TokenKind::Equals, "="),
            ';' => lexer.symbol(TokenKind::Semicolon, ";"),
            '\n' => lexer.symbol(TokenKind::Endline, "\n"),
            ' ' | '\t' | '\r' => lexer.flush(),
            _ => lexer.buffer.push(c),
        }
    }

    // Trailing token with no terminator. An unterminated string is dropped,
    // not flushed as a mangled identifier.
    if lexer.delimiter.is_none() {
        lexer.flush();
    }

    lexer.tokens
}
