//! Lexer totality fuzzer.
//!
//! `tokenize` is a total function: it must never panic and never error,
//! whatever bytes arrive. Feeds arbitrary strings straight through.

use honggfuzz::fuzz;
use minisql_rs::tokenize;

fn main() {
    loop {
        fuzz!(|input: String| {
            let _ = tokenize(&input);
        });
    }
}
