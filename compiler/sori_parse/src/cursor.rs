//! Token cursor for navigating the token stream.
//!
//! Low-level access, one-token lookahead, and consumption. The stream is
//! guaranteed non-empty and EOF-terminated by the scanner, so `current()` is
//! always valid and `advance()` pins at the EOF token.

use std::mem::discriminant;

use sori_ir::{Token, TokenKind};

/// Cursor over a scanned token sequence.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            tokens.last().is_some_and(Token::is_eof),
            "token stream must be EOF-terminated"
        );
        Cursor { tokens, pos: 0 }
    }

    /// The current (not yet consumed) token.
    #[inline]
    pub(crate) fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    /// The most recently consumed token.
    #[inline]
    pub(crate) fn previous(&self) -> &'a Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Whether the cursor sits on the EOF token.
    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.current().is_eof()
    }

    /// Consume and return the current token (stays on EOF at the end).
    pub(crate) fn advance(&mut self) -> &'a Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    /// Whether the current token has the same kind (payloads ignored).
    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        discriminant(&self.current().kind) == discriminant(kind)
    }

    /// Whether the current token is an identifier.
    #[inline]
    pub(crate) fn check_ident(&self) -> bool {
        matches!(self.current().kind, TokenKind::Ident)
    }

    /// Consume the current token if it matches `kind`.
    pub(crate) fn match_kind(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if it matches any of `kinds`.
    pub(crate) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|k| self.check(k)) {
            self.advance();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> Vec<Token> {
        vec![
            Token::new(TokenKind::Var, "var", 1),
            Token::new(TokenKind::Ident, "x", 1),
            Token::new(TokenKind::Semicolon, ";", 1),
            Token::eof(1),
        ]
    }

    #[test]
    fn advance_pins_at_eof() {
        let toks = tokens();
        let mut cursor = Cursor::new(&toks);
        for _ in 0..10 {
            cursor.advance();
        }
        assert!(cursor.is_at_end());
        assert_eq!(cursor.previous().kind, TokenKind::Semicolon);
    }

    #[test]
    fn check_ignores_payloads() {
        let toks = vec![
            Token::new(TokenKind::Number(2.5), "2.5", 1),
            Token::eof(1),
        ];
        let cursor = Cursor::new(&toks);
        assert!(cursor.check(&TokenKind::Number(0.0)));
        assert!(!cursor.check(&TokenKind::Str(String::new())));
    }

    #[test]
    fn match_any_consumes_on_hit() {
        let toks = tokens();
        let mut cursor = Cursor::new(&toks);
        assert!(cursor.match_any(&[TokenKind::Fun, TokenKind::Var]));
        assert!(cursor.check_ident());
    }
}
