//! Single-pass scanner.
//!
//! Maintains `start`/`current` byte offsets into the source and a 1-based
//! line counter. Two-character operators use one character of lookahead;
//! comment and string scanning use memchr to skip to the interesting byte.
//! Identifiers may mix ASCII letters, `_`, digits, and Hangul syllables
//! (U+AC00..=U+D7A3), so both keyword alphabets lex naturally.

use memchr::{memchr, memchr2};
use sori_diagnostic::Diagnostic;
use sori_ir::{Token, TokenKind};

use crate::keywords;

/// Whether `c` can start an identifier.
fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Whether `c` can continue an identifier.
fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}

/// The scanner. Create one per source text via [`Scanner::new`] and consume
/// it with [`Scanner::scan_tokens`].
pub struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
    /// Byte offset where the current token started.
    start: usize,
    /// Byte offset of the next character to read.
    current: usize,
    /// 1-based line of `current`.
    line: u32,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `source`.
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scan the whole source, returning tokens and lexical diagnostics.
    pub fn scan_tokens(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }
        self.tokens.push(Token::eof(self.line));
        (self.tokens, self.diagnostics)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Read the next character and advance past it.
    fn advance(&mut self) -> char {
        let c = self.peek();
        self.current += c.len_utf8();
        c
    }

    /// Current character without advancing; `'\0'` at end of input.
    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    /// Character after the current one without advancing.
    fn peek_next(&self) -> char {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    /// Consume the current character only if it equals `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == expected {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = &self.source[self.start..self.current];
        self.tokens.push(Token::new(kind, lexeme, self.line));
    }

    fn scan_token(&mut self) {
        let c = self.advance();
        match c {
            '(' => self.add_token(TokenKind::LParen),
            ')' => self.add_token(TokenKind::RParen),
            '{' => self.add_token(TokenKind::LBrace),
            '}' => self.add_token(TokenKind::RBrace),
            '[' => self.add_token(TokenKind::LBracket),
            ']' => self.add_token(TokenKind::RBracket),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '%' => self.add_token(TokenKind::Percent),

            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEq
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqEq
                } else {
                    TokenKind::Eq
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LtEq
                } else {
                    TokenKind::Lt
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                };
                self.add_token(kind);
            }

            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            '"' => self.string(),

            _ => {
                if c.is_ascii_digit() {
                    self.number();
                } else if is_alpha(c) {
                    self.identifier();
                } else {
                    self.diagnostics
                        .push(Diagnostic::error(self.line, "Unexpected character."));
                }
            }
        }
    }

    /// Skip to the end of a `//` comment. The newline itself is left for
    /// `scan_token` so line accounting stays in one place.
    fn skip_line_comment(&mut self) {
        match memchr(b'\n', &self.source.as_bytes()[self.current..]) {
            Some(offset) => self.current += offset,
            None => self.current = self.source.len(),
        }
    }

    /// Scan a `"`-delimited string literal. No escape sequences; newlines are
    /// allowed inside and increment the line counter. An unterminated string
    /// is reported and scanning resumes from end of input.
    fn string(&mut self) {
        loop {
            let rest = &self.source.as_bytes()[self.current..];
            match memchr2(b'"', b'\n', rest) {
                Some(offset) if rest[offset] == b'\n' => {
                    self.current += offset + 1;
                    self.line += 1;
                }
                Some(offset) => {
                    self.current += offset + 1;
                    let value = self.source[self.start + 1..self.current - 1].to_string();
                    self.add_token(TokenKind::Str(value));
                    return;
                }
                None => {
                    self.current = self.source.len();
                    self.diagnostics
                        .push(Diagnostic::error(self.line, "Unterminated string."));
                    return;
                }
            }
        }
    }

    /// Scan an integer or decimal literal. No exponent, no leading sign
    /// (sign is unary minus, handled by the parser).
    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.current += 1;
        }
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.current += 1;
            while self.peek().is_ascii_digit() {
                self.current += 1;
            }
        }
        // A run of ASCII digits with at most one interior dot always parses.
        let value = self.source[self.start..self.current]
            .parse::<f64>()
            .unwrap_or_default();
        self.add_token(TokenKind::Number(value));
    }

    /// Scan an identifier and resolve it against both keyword tables.
    fn identifier(&mut self) {
        while is_alphanumeric(self.peek()) {
            self.current += self.peek().len_utf8();
        }
        let text = &self.source[self.start..self.current];
        let kind = keywords::resolve(text).unwrap_or(TokenKind::Ident);
        self.add_token(kind);
    }
}
