#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;

pub mod ast;
pub mod format;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use ast::{Assignments, Delete, Insert, Program, Select, Statement, Update, WhereClause};
pub use format::FormatSql;
pub use lexer::{Token, TokenKind, tokenize};
pub use parser::{Parser, SyntaxError, parse_single, parse_string};
