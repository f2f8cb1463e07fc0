//! Scanner for the Sori interpreter.
//!
//! Converts raw source text into a flat token sequence in one left-to-right
//! pass. Lexical errors (unterminated string, unrecognized character) are
//! recoverable: each produces one diagnostic and scanning continues, so a
//! single pass surfaces every independent error. The output always ends with
//! one EOF token carrying the final line number.

mod keywords;
mod scanner;


use sori_diagnostic::Diagnostic;
use sori_ir::Token;

pub use scanner::Scanner;

/// Scan `source` into tokens plus any lexical diagnostics.
pub fn scan(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    Scanner::new(source).scan_tokens()
}
