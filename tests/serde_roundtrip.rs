//! Serde round-trip tests, gated behind the `serde` feature.

#![cfg(feature = "serde")]

use minisql_rs::{Program, Token, parse_string, tokenize};

#[test]
fn test_program_serde_roundtrip() {
    let program = parse_string(
        "INSERT INTO users (id, name) VALUES (1, 'Alice');
         UPDATE users SET name = 'Alicia' WHERE id = 1;
         SELECT id, name FROM users",
    )
    .unwrap();

    let json = serde_json::to_string(&program).unwrap();
    let decoded: Program = serde_json::from_str(&json).unwrap();
    assert_eq!(program, decoded);
}

#[test]
fn test_token_serde_roundtrip() {
    let tokens = tokenize("SELECT id FROM users");

    let json = serde_json::to_string(&tokens).unwrap();
    let decoded: Vec<Token> = serde_json::from_str(&json).unwrap();
    assert_eq!(tokens, decoded);
}
