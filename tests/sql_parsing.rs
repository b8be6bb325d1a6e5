//! Integration tests for the tokenize → parse → render pipeline.
//!
//! These exercise the crate through its public surface only, the way a
//! shell or execution layer would: raw text in, statements or a syntax
//! error out, canonical text back.

use minisql_rs::{
    FormatSql, Statement, SyntaxError, TokenKind, parse_single, parse_string, tokenize,
};

/// Parse, render, re-parse, and require a structurally identical program.
fn assert_roundtrip(sql: &str) {
    let program = parse_string(sql).expect("Failed to parse SQL");
    let rendered = program.format_sql();
    let reparsed = parse_string(&rendered).expect("Failed to re-parse rendered SQL");
    assert_eq!(program, reparsed, "round-trip changed the AST for {sql:?}");
}

// =============================================================================
// Whitespace and case insensitivity
// =============================================================================

#[test]
fn test_whitespace_insensitivity() {
    let tight = parse_string("SELECT id,name FROM t").unwrap();
    let loose = parse_string("SELECT   id , name   FROM   t").unwrap();
    assert_eq!(tight, loose);
}

#[test]
fn test_newlines_inside_statement() {
    let flat = parse_string("INSERT INTO t (a, b) VALUES (1, 2)").unwrap();
    let spread = parse_string("INSERT INTO t (\n  a,\n  b\n) VALUES (\n  1,\n  2\n)").unwrap();
    assert_eq!(flat, spread);
}

#[test]
fn test_keyword_case_insensitivity() {
    let lower = parse_string("select id from Users").unwrap();
    let upper = parse_string("SELECT id FROM Users").unwrap();
    assert_eq!(lower, upper);

    // Identifier casing is data and must survive.
    let Statement::Select(select) = &lower.statements[0] else {
        panic!("Expected Select");
    };
    assert_eq!(select.table, "Users");
}

// =============================================================================
// Quote handling
// =============================================================================

#[test]
fn test_quote_preservation() {
    let tokens = tokenize("INSERT INTO t VALUES ('a,b')");
    let strings: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::String)
        .collect();
    assert_eq!(strings.len(), 1);
    assert_eq!(strings[0].literal, "'a,b'");

    let program = parse_string("INSERT INTO t VALUES ('a,b')").unwrap();
    let Statement::Insert(insert) = &program.statements[0] else {
        panic!("Expected Insert");
    };
    assert_eq!(insert.values, vec!["'a,b'"]);
}

#[test]
fn test_double_quoted_string_with_embedded_single_quote() {
    let program = parse_string("INSERT INTO t VALUES (\"it's\")").unwrap();
    let Statement::Insert(insert) = &program.statements[0] else {
        panic!("Expected Insert");
    };
    assert_eq!(insert.values, vec!["\"it's\""]);
}

#[test]
fn test_unterminated_string_loses_buffer() {
    // The dangling string consumes to end of input and emits nothing, so
    // the parse fails at the unclosed VALUES list, not in the lexer.
    let err = parse_string("INSERT INTO t VALUES ('abc").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::UnexpectedEof {
            expected: "value".into(),
        }
    );
}

// =============================================================================
// Optional clauses
// =============================================================================

#[test]
fn test_optional_where_clauses() {
    let program = parse_string("DELETE FROM t").unwrap();
    let Statement::Delete(delete) = &program.statements[0] else {
        panic!("Expected Delete");
    };
    assert!(delete.where_clause.is_none());

    let program = parse_string("UPDATE t SET a = '1' WHERE a = '1'").unwrap();
    let Statement::Update(update) = &program.statements[0] else {
        panic!("Expected Update");
    };
    let where_clause = update.where_clause.as_ref().unwrap();
    assert_eq!(where_clause.column, "a");
    assert_eq!(where_clause.value, "'1'");
}

// =============================================================================
// Error locality
// =============================================================================

#[test]
fn test_error_cites_ident_expectation_at_from() {
    let err = parse_string("SELECT FROM t").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::UnexpectedToken {
            expected: "field name".into(),
            found: TokenKind::From,
            pos: 1,
        }
    );
}

#[test]
fn test_error_cites_eof_on_dangling_where() {
    let err = parse_string("DELETE FROM t WHERE").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::UnexpectedEof {
            expected: "column name".into(),
        }
    );
}

#[test]
fn test_first_error_aborts_the_whole_parse() {
    let err = parse_string("DELETE FROM a;\nSELECT FROM b").unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::UnexpectedToken {
            found: TokenKind::From,
            ..
        }
    ));
}

// =============================================================================
// Programs and separators
// =============================================================================

#[test]
fn test_multi_statement_program() {
    let sql = "INSERT INTO users (id) VALUES (1);
               UPDATE users SET id = 2 WHERE id = 1;
               DELETE FROM users WHERE id = 2;
               SELECT id FROM users";
    let program = parse_string(sql).unwrap();
    assert_eq!(program.len(), 4);
    assert!(program.statements[0].is_dml());
    assert!(program.statements[3].is_query());
    assert!(program.iter().all(|s| s.table() == "users"));
}

#[test]
fn test_separator_only_input() {
    let program = parse_string(" ; \n ; \n").unwrap();
    assert!(program.is_empty());
}

#[test]
fn test_parse_single_takes_first_statement() {
    let statement = parse_single("SELECT id FROM t; DELETE FROM t").unwrap();
    assert!(matches!(statement, Statement::Select(_)));

    assert_eq!(parse_single("\n;\n"), Err(SyntaxError::EmptyInput));
}

// =============================================================================
// Round-trip rendering
// =============================================================================

#[test]
fn test_roundtrip_select() {
    assert_roundtrip("SELECT id, name FROM users");
    assert_roundtrip("select a,b,c from t");
}

#[test]
fn test_roundtrip_insert() {
    assert_roundtrip("INSERT INTO users (id, name) VALUES (1, 'Alice')");
    assert_roundtrip("INSERT INTO users VALUES (1, 'Alice', -3.5)");
    assert_roundtrip("INSERT INTO t VALUES ('a,b', \"c(d)\", 'x = y')");
}

#[test]
fn test_roundtrip_update() {
    assert_roundtrip("UPDATE users SET name = 'Bob', age = 31 WHERE id = 1");
    assert_roundtrip("UPDATE users SET name = 'Bob'");
    // Duplicate column collapses before rendering, then stays stable.
    assert_roundtrip("UPDATE t SET a = '1', b = '2', a = '3'");
}

#[test]
fn test_roundtrip_delete() {
    assert_roundtrip("DELETE FROM users WHERE id = 1");
    assert_roundtrip("DELETE FROM users");
}

#[test]
fn test_roundtrip_whole_program() {
    assert_roundtrip(
        "INSERT INTO users (id, name) VALUES (1, 'Alice');
         UPDATE users SET name = 'Alicia' WHERE id = 1;
         DELETE FROM users WHERE id = 1;
         SELECT id, name FROM users",
    );
}

#[test]
fn test_canonical_rendering() {
    let program = parse_string("select   id , name   from   users").unwrap();
    assert_eq!(
        program.statements[0].format_sql(),
        "SELECT id, name FROM users"
    );
}

// =============================================================================
// Token stream sanity
// =============================================================================

#[test]
fn test_tokenize_never_empty_for_real_content() {
    for input in ["x", "SELECT", "1", ";", "(", "'s'"] {
        assert!(!tokenize(input).is_empty(), "no tokens for {input:?}");
    }
}

#[test]
fn test_values_accept_string_number_and_ident() {
    let program = parse_string("UPDATE t SET a = 'text', b = 42, c = flag").unwrap();
    let Statement::Update(update) = &program.statements[0] else {
        panic!("Expected Update");
    };
    assert_eq!(update.assignments.get("a").unwrap(), "'text'");
    assert_eq!(update.assignments.get("b").unwrap(), "42");
    assert_eq!(update.assignments.get("c").unwrap(), "flag");
}
