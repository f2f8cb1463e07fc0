//! Statement parsing, including the `for` → `while` desugaring.

use sori_ir::{Expr, ExprKind, Literal, Stmt, TokenKind};

use crate::{ParseResult, Parser};

impl Parser<'_> {
    pub(crate) fn statement(&mut self) -> ParseResult<Stmt> {
        if self.cursor.match_kind(&TokenKind::For) {
            return self.for_statement();
        }
        if self.cursor.match_kind(&TokenKind::If) {
            return self.if_statement();
        }
        if self.cursor.match_kind(&TokenKind::Print) {
            return self.print_statement();
        }
        if self.cursor.match_kind(&TokenKind::Return) {
            return self.return_statement();
        }
        if self.cursor.match_kind(&TokenKind::While) {
            return self.while_statement();
        }
        if self.cursor.match_kind(&TokenKind::Break) {
            let line = self.cursor.previous().line;
            self.expect(&TokenKind::Semicolon, "Expect ';' after 'break'.")?;
            return Ok(Stmt::Break { line });
        }
        if self.cursor.match_kind(&TokenKind::Continue) {
            let line = self.cursor.previous().line;
            self.expect(&TokenKind::Semicolon, "Expect ';' after 'continue'.")?;
            return Ok(Stmt::Continue { line });
        }
        if self.cursor.match_kind(&TokenKind::LBrace) {
            return Ok(Stmt::Block(self.block()?));
        }
        self.expression_statement()
    }

    /// `block → "{" declaration* "}"`, the `{` already consumed.
    ///
    /// Inner errors recover at `declaration`, so a broken statement inside a
    /// block does not abort the block.
    pub(crate) fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) && !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        self.expect(&TokenKind::RBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    /// `forStmt → "for" "(" (varDecl | exprStmt | ";") expression? ";"
    /// expression? ")" statement`
    ///
    /// Desugared at parse time: the initializer wraps a `while` whose body is
    /// a block of {original body, increment}. A missing condition becomes
    /// literal `true`. Note the increment sits *after* the body in the block,
    /// so a `continue` in the body skips it — that is what this desugaring
    /// composes to, and the behavior the tests pin.
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        let for_line = self.cursor.previous().line;
        self.expect(&TokenKind::LParen, "Expect '(' after 'for'.")?;

        let initializer = if self.cursor.match_kind(&TokenKind::Semicolon) {
            None
        } else if self.cursor.match_kind(&TokenKind::Var) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.cursor.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(&TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.cursor.check(&TokenKind::RParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(&TokenKind::RParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;
        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }
        let condition = condition.unwrap_or_else(|| {
            self.arena
                .alloc(Expr::new(ExprKind::Literal(Literal::Bool(true)), for_line))
        });
        let mut stmt = Stmt::While {
            condition,
            body: Box::new(body),
        };
        if let Some(initializer) = initializer {
            stmt = Stmt::Block(vec![initializer, stmt]);
        }
        Ok(stmt)
    }

    /// `ifStmt → "if" "(" expression ")" statement ("else" statement)?`
    ///
    /// `else` binds to the nearest `if`; else-if chains fall out of nesting.
    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.expect(&TokenKind::LParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.expect(&TokenKind::RParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.cursor.match_kind(&TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };
        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let value = self.expression()?;
        self.expect(&TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    fn return_statement(&mut self) -> ParseResult<Stmt> {
        let line = self.cursor.previous().line;
        let value = if self.cursor.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(&TokenKind::Semicolon, "Expect ';' after return value.")?;
        Ok(Stmt::Return { line, value })
    }

    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.expect(&TokenKind::LParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.expect(&TokenKind::RParen, "Expect ')' after condition.")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::While { condition, body })
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.expect(&TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }
}
