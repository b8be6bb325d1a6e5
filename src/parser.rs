//! Recursive-descent parser: token stream → typed statement tree.
//!
//! The parser consumes a token sequence with single-token lookahead and no
//! backtracking. The first grammar violation aborts the whole parse; there
//! is no error recovery and no partial program is returned.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::ast::{Assignments, Delete, Insert, Program, Select, Statement, Update, WhereClause};
use crate::lexer::{Token, TokenKind, tokenize};

/// Syntax errors raised when the token stream violates the grammar.
///
/// Every variant is equally terminal for the parse attempt that raised it;
/// the caller decides whether to report it, abort a batch, or re-submit a
/// corrected input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// The current token does not match what a grammar rule requires.
    #[error("expected {expected}, got {found} at token {pos}")]
    UnexpectedToken {
        /// The expected token spelling or grammar rule name.
        expected: String,
        /// The token kind actually found.
        found: TokenKind,
        /// Index of the offending token in the token sequence.
        pos: usize,
    },
    /// The token stream ended in the middle of a grammar rule.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// The expected token spelling or grammar rule name.
        expected: String,
    },
    /// The input contained no statement at all.
    #[error("input contained no statement")]
    EmptyInput,
}

/// Single-use recursive-descent parser over a token sequence.
///
/// A parser is constructed fresh per token sequence and consumed by one
/// [`parse`](Parser::parse) call, which takes it by value.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a parser over a token sequence.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the full token sequence into a program.
    ///
    /// Newlines and semicolons between statements are skipped as pure
    /// separators, so a separator-only input yields an empty program.
    /// Inside a statement only newlines are skippable; a semicolon there is
    /// rejected by whatever expectation encounters it next.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] the first time the grammar is violated,
    /// discarding any statements parsed so far.
    pub fn parse(mut self) -> Result<Program, SyntaxError> {
        let mut statements = Vec::new();

        loop {
            self.skip_separators();
            let Some(kind) = self.current_kind() else {
                break;
            };

            let statement = match kind {
                TokenKind::Select => self.parse_select()?,
                TokenKind::Insert => self.parse_insert()?,
                TokenKind::Update => self.parse_update()?,
                TokenKind::Delete => self.parse_delete()?,
                found => {
                    return Err(SyntaxError::UnexpectedToken {
                        expected: "SELECT, INSERT, UPDATE, or DELETE".into(),
                        found,
                        pos: self.pos,
                    });
                }
            };
            statements.push(statement);
        }

        Ok(Program { statements })
    }

    /// `SELECT field [, field]* FROM table`
    fn parse_select(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenKind::Select)?;

        let mut fields = Vec::new();
        loop {
            self.skip_newlines();
            fields.push(self.expect_ident("field name")?);
            self.skip_newlines();
            if self.current_kind() == Some(TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }

        self.skip_newlines();
        self.expect(TokenKind::From)?;
        self.skip_newlines();
        let table = self.expect_ident("table name")?;

        Ok(Statement::Select(Select { fields, table }))
    }

    /// `INSERT INTO table [(column [, column]*)] VALUES (value [, value]*)`
    fn parse_insert(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenKind::Insert)?;
        self.skip_newlines();
        self.expect(TokenKind::Into)?;
        self.skip_newlines();
        let table = self.expect_ident("table name")?;
        self.skip_newlines();

        // Optional column list. Empty means positional; the grammar does not
        // check the column count against the value count.
        let mut columns = Vec::new();
        if self.current_kind() == Some(TokenKind::LParen) {
            self.advance();
            self.skip_newlines();
            loop {
                columns.push(self.expect_ident("column name")?);
                self.skip_newlines();
                if self.current_kind() == Some(TokenKind::Comma) {
                    self.advance();
                    self.skip_newlines();
                } else {
                    break;
                }
            }
            self.expect(TokenKind::RParen)?;
            self.skip_newlines();
        }

        self.expect(TokenKind::Values)?;
        self.skip_newlines();
        self.expect(TokenKind::LParen)?;
        self.skip_newlines();

        let mut values = Vec::new();
        loop {
            values.push(self.expect_value("value")?);
            self.skip_newlines();
            if self.current_kind() == Some(TokenKind::Comma) {
                self.advance();
                self.skip_newlines();
            } else {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;

        Ok(Statement::Insert(Insert {
            table,
            columns,
            values,
        }))
    }

    /// `UPDATE table SET column = value [, column = value]* [WHERE ...]`
    fn parse_update(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenKind::Update)?;
        self.skip_newlines();
        let table = self.expect_ident("table name")?;
        self.skip_newlines();
        self.expect(TokenKind::Set)?;
        self.skip_newlines();

        let mut assignments = Assignments::default();
        loop {
            let column = self.expect_ident("column name")?;
            self.skip_newlines();
            self.expect(TokenKind::Equals)?;
            self.skip_newlines();
            let value = self.expect_value("value")?;
            // A duplicate column silently overwrites its predecessor, keeping
            // the first-insertion position.
            assignments.insert(column, value);
            self.skip_newlines();
            if self.current_kind() == Some(TokenKind::Comma) {
                self.advance();
                self.skip_newlines();
            } else {
                break;
            }
        }

        let where_clause = self.parse_where_clause()?;

        Ok(Statement::Update(Update {
            table,
            assignments,
            where_clause,
        }))
    }

    /// `DELETE FROM table [WHERE column = value]`
    fn parse_delete(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenKind::Delete)?;
        self.skip_newlines();
        self.expect(TokenKind::From)?;
        self.skip_newlines();
        let table = self.expect_ident("table name")?;
        self.skip_newlines();

        let where_clause = self.parse_where_clause()?;

        Ok(Statement::Delete(Delete {
            table,
            where_clause,
        }))
    }

    /// Parse an optional `WHERE column = value` clause. Absence of the WHERE
    /// keyword is not an error.
    fn parse_where_clause(&mut self) -> Result<Option<WhereClause>, SyntaxError> {
        if self.current_kind() != Some(TokenKind::Where) {
            return Ok(None);
        }
        self.advance();
        self.skip_newlines();
        let column = self.expect_ident("column name")?;
        self.skip_newlines();
        self.expect(TokenKind::Equals)?;
        self.skip_newlines();
        let value = self.expect_value("value")?;

        Ok(Some(WhereClause { column, value }))
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|token| token.kind)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Skip statement separators: newlines and semicolons. Valid only at
    /// the top level, between statements.
    fn skip_separators(&mut self) {
        while self.current_kind().is_some_and(TokenKind::is_separator) {
            self.advance();
        }
    }

    /// Skip newlines inside a statement. Semicolons are not separators here
    /// and are left for the next expectation to reject.
    fn skip_newlines(&mut self) {
        while self.current_kind() == Some(TokenKind::Endline) {
            self.advance();
        }
    }

    /// Consume the current token if it matches the expected kind.
    fn expect(&mut self, expected: TokenKind) -> Result<(), SyntaxError> {
        match self.current() {
            Some(token) if token.kind == expected => {
                self.advance();
                Ok(())
            }
            Some(token) => Err(SyntaxError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.kind,
                pos: self.pos,
            }),
            None => Err(SyntaxError::UnexpectedEof {
                expected: expected.to_string(),
            }),
        }
    }

    /// Consume an IDENT token and return its literal. `expected` names the
    /// grammar role ("field name", "table name", "column name") for error
    /// messages.
    fn expect_ident(&mut self, expected: &str) -> Result<String, SyntaxError> {
        match self.current() {
            Some(token) if token.kind == TokenKind::Ident => {
                let literal = token.literal.clone();
                self.advance();
                Ok(literal)
            }
            Some(token) => Err(SyntaxError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.kind,
                pos: self.pos,
            }),
            None => Err(SyntaxError::UnexpectedEof {
                expected: expected.to_string(),
            }),
        }
    }

    /// Consume a value token (STRING, NUMBER, or bare IDENT) and return its
    /// literal verbatim. No type coercion happens at parse time.
    fn expect_value(&mut self, expected: &str) -> Result<String, SyntaxError> {
        match self.current() {
            Some(token) if token.kind.is_value() => {
                let literal = token.literal.clone();
                self.advance();
                Ok(literal)
            }
            Some(token) => Err(SyntaxError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.kind,
                pos: self.pos,
            }),
            None => Err(SyntaxError::UnexpectedEof {
                expected: expected.to_string(),
            }),
        }
    }
}

/// Tokenize and parse raw text into a program.
///
/// # Errors
///
/// Returns a [`SyntaxError`] the first time the grammar is violated.
pub fn parse_string(input: &str) -> Result<Program, SyntaxError> {
    Parser::new(tokenize(input)).parse()
}

/// Tokenize and parse raw text, returning only the first statement.
///
/// Intended for callers that accept one command at a time.
///
/// # Errors
///
/// Returns [`SyntaxError::EmptyInput`] if the input contains no statement,
/// or whatever error the full parse raises.
pub fn parse_single(input: &str) -> Result<Statement, SyntaxError> {
    parse_string(input)?
        .statements
        .into_iter()
        .next()
        .ok_or(SyntaxError::EmptyInput)
}
