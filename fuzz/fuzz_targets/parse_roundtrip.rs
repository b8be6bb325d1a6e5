//! Parse → render → parse stability fuzzer.
//!
//! Any input that parses must render to canonical text that re-parses to a
//! structurally identical program.

use honggfuzz::fuzz;
use minisql_rs::{FormatSql, parse_string};

fn main() {
    loop {
        fuzz!(|input: String| {
            if let Ok(program) = parse_string(&input) {
                let rendered = program.format_sql();
                let reparsed = parse_string(&rendered).expect("rendered SQL must re-parse");
                assert_eq!(program, reparsed);
            }
        });
    }
}
