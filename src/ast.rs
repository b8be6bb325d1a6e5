//! Statement data model produced by the parser.
//!
//! The four statement shapes form a closed sum type so that an executor's
//! dispatch is exhaustiveness-checked at build time; new statement kinds are
//! added by extending [`Statement`], not by subclassing. All value positions
//! carry the raw token literal (quotes included for strings) — coercion is
//! the executor's job, not ours.

use alloc::string::String;
use alloc::vec::Vec;
use indexmap::IndexMap as IndexMapRaw;

/// Insertion-ordered column → value map used for UPDATE assignments, with
/// hashbrown's default hasher for `no_std` compatibility.
///
/// A duplicate column keeps its first position but takes the last value
/// written, so rendering is deterministic while assignment semantics stay
/// last-write-wins.
pub type Assignments = IndexMapRaw<String, String, hashbrown::DefaultHashBuilder>;

/// A `WHERE column = value` clause. Both parts are present or the clause is
/// absent; there is no half-populated state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhereClause {
    /// Column name.
    pub column: String,
    /// Comparison value, verbatim token literal.
    pub value: String,
}

/// A SELECT statement: `SELECT fields FROM table`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Select {
    /// Column names to select, in source order. Never empty; the grammar
    /// rejects a SELECT without at least one field.
    pub fields: Vec<String>,
    /// Table name to select from.
    pub table: String,
}

/// An INSERT statement: `INSERT INTO table [(columns)] VALUES (values)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insert {
    /// Table name.
    pub table: String,
    /// Column names; empty means the insert is positional. The grammar does
    /// not check that the column count matches the value count.
    pub columns: Vec<String>,
    /// Values to insert, verbatim token literals.
    pub values: Vec<String>,
}

/// An UPDATE statement: `UPDATE table SET assignments [WHERE column = value]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Update {
    /// Table name.
    pub table: String,
    /// `column = value` assignments, in first-insertion order.
    pub assignments: Assignments,
    /// Optional WHERE clause.
    pub where_clause: Option<WhereClause>,
}

/// A DELETE statement: `DELETE FROM table [WHERE column = value]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delete {
    /// Table name.
    pub table: String,
    /// Optional WHERE clause.
    pub where_clause: Option<WhereClause>,
}

/// A parsed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    /// SELECT statement.
    Select(Select),
    /// INSERT statement.
    Insert(Insert),
    /// UPDATE statement.
    Update(Update),
    /// DELETE statement.
    Delete(Delete),
}

impl Statement {
    /// Name of the table this statement targets.
    #[must_use]
    pub fn table(&self) -> &str {
        match self {
            Self::Select(select) => &select.table,
            Self::Insert(insert) => &insert.table,
            Self::Update(update) => &update.table,
            Self::Delete(delete) => &delete.table,
        }
    }

    /// Whether this statement reads data (SELECT).
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Select(_))
    }

    /// Whether this statement modifies data (INSERT, UPDATE, DELETE).
    #[must_use]
    pub const fn is_dml(&self) -> bool {
        !self.is_query()
    }
}

/// An ordered sequence of statements parsed from one input. The program owns
/// its statements exclusively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    /// The parsed statements, in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Number of statements in the program.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Whether the program contains no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterate over the statements in source order.
    pub fn iter(&self) -> core::slice::Iter<'_, Statement> {
        self.statements.iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Statement;
    type IntoIter = core::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

impl IntoIterator for Program {
    type Item = Statement;
    type IntoIter = alloc::vec::IntoIter<Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.into_iter()
    }
}
