//! Canonical SQL text rendering.

use alloc::string::String;
use core::fmt::Write;

use crate::ast::{Delete, Insert, Program, Select, Statement, Update, WhereClause};

/// Trait for types that render back to canonical SQL text.
///
/// Rendering is pure and side-effect free, meant for diagnostics and
/// echoing, never execution. Value literals are emitted verbatim, quotes
/// included. For any successfully parsed statement, rendering then
/// re-parsing yields a structurally identical statement.
pub trait FormatSql {
    /// Format this value as a SQL string.
    fn format_sql(&self) -> String;
}

impl FormatSql for WhereClause {
    fn format_sql(&self) -> String {
        alloc::format!("{} = {}", self.column, self.value)
    }
}

impl FormatSql for Select {
    fn format_sql(&self) -> String {
        let mut sql = String::new();
        sql.push_str("SELECT ");
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(field);
        }
        write!(sql, " FROM {}", self.table).unwrap();
        sql
    }
}

impl FormatSql for Insert {
    fn format_sql(&self) -> String {
        let mut sql = String::new();
        write!(sql, "INSERT INTO {}", self.table).unwrap();

        if !self.columns.is_empty() {
            sql.push_str(" (");
            for (i, col) in self.columns.iter().enumerate() {
                if i > 0 {
                    sql.push_str(", ");
                }
                sql.push_str(col);
            }
            sql.push(')');
        }

        sql.push_str(" VALUES (");
        for (i, val) in self.values.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(val);
        }
        sql.push(')');

        sql
    }
}

impl FormatSql for Update {
    fn format_sql(&self) -> String {
        let mut sql = String::new();
        write!(sql, "UPDATE {} SET ", self.table).unwrap();

        // Assignments render in first-insertion order, deterministically.
        for (i, (col, val)) in self.assignments.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            write!(sql, "{col} = {val}").unwrap();
        }

        if let Some(where_clause) = &self.where_clause {
            write!(sql, " WHERE {}", where_clause.format_sql()).unwrap();
        }

        sql
    }
}

impl FormatSql for Delete {
    fn format_sql(&self) -> String {
        let mut sql = String::new();
        write!(sql, "DELETE FROM {}", self.table).unwrap();

        if let Some(where_clause) = &self.where_clause {
            write!(sql, " WHERE {}", where_clause.format_sql()).unwrap();
        }

        sql
    }
}

impl FormatSql for Statement {
    fn format_sql(&self) -> String {
        match self {
            Statement::Select(select) => select.format_sql(),
            Statement::Insert(insert) => insert.format_sql(),
            Statement::Update(update) => update.format_sql(),
            Statement::Delete(delete) => delete.format_sql(),
        }
    }
}

impl FormatSql for Program {
    fn format_sql(&self) -> String {
        let mut sql = String::new();
        for statement in &self.statements {
            sql.push_str(&statement.format_sql());
            sql.push('\n');
        }
        sql
    }
}
