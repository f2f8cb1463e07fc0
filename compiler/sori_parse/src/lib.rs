//! Recursive-descent parser for the Sori interpreter.
//!
//! One left-to-right pass over the token sequence, producing a [`Program`]
//! (statement list plus expression arena) and diagnostics. The parser never
//! fails outright: a syntax error inside a declaration discards tokens until
//! a statement boundary (panic-mode synchronization) and parsing resumes, so
//! each broken statement costs exactly one diagnostic.
//!
//! Precedence ladder, lowest to highest: assignment → or → and → equality →
//! comparison → term → factor (incl. `%`) → unary → call/index chain →
//! primary. `for` is desugared into `while` at parse time.

mod cursor;
mod grammar;


use sori_diagnostic::Diagnostic;
use sori_ir::{ExprArena, Program, Token, TokenKind};

use cursor::Cursor;

/// Marker for a syntax error whose diagnostic has already been recorded.
///
/// Propagated with `?` up to the enclosing declaration, which synchronizes
/// and drops the broken statement.
pub(crate) struct ParseError;

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// Parse a token sequence into a program plus syntax diagnostics.
pub fn parse(tokens: &[Token]) -> (Program, Vec<Diagnostic>) {
    let mut parser = Parser::new(tokens);
    let statements = parser.parse_program();
    let Parser {
        arena, diagnostics, ..
    } = parser;
    (Program { statements, arena }, diagnostics)
}

/// Parser state: a token cursor, the expression arena being filled, and the
/// diagnostics collected so far.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena: ExprArena::new(),
            diagnostics: Vec::new(),
        }
    }

    fn parse_program(&mut self) -> Vec<sori_ir::Stmt> {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        statements
    }

    /// Record a diagnostic pointing at `token` without aborting the current
    /// production. Used for non-fatal errors (bad assignment target,
    /// over-long argument lists).
    pub(crate) fn report(&mut self, token: &Token, message: &str) {
        let diagnostic = if token.is_eof() {
            Diagnostic::at_end(token.line, message)
        } else {
            Diagnostic::at_lexeme(token.line, token.lexeme.clone(), message)
        };
        self.diagnostics.push(diagnostic);
    }

    /// Record a diagnostic and return the error marker for `?` propagation.
    pub(crate) fn error(&mut self, token: &Token, message: &str) -> ParseError {
        self.report(token, message);
        ParseError
    }

    /// Consume the current token if it has `kind`, else record an error.
    pub(crate) fn expect(&mut self, kind: &TokenKind, message: &str) -> ParseResult<Token> {
        if self.cursor.check(kind) {
            Ok(self.cursor.advance().clone())
        } else {
            Err(self.error(&self.cursor.current().clone(), message))
        }
    }

    /// Panic-mode recovery: discard tokens until a statement boundary — a
    /// just-consumed semicolon or a token that starts a new declaration.
    pub(crate) fn synchronize(&mut self) {
        tracing::trace!(line = self.cursor.current().line, "synchronizing after parse error");
        self.cursor.advance();
        while !self.cursor.is_at_end() {
            if self.cursor.previous().kind == TokenKind::Semicolon {
                return;
            }
            if self.cursor.current().kind.starts_statement() {
                return;
            }
            self.cursor.advance();
        }
    }
}
