//! Expression parsing.
//!
//! The precedence ladder, the call/dot/index postfix chain, and assignment
//! target rewriting. Assignment is right-associative; its left operand must
//! already be a Variable, Get, or IndexGet node, which is rewritten into the
//! matching store node (Assign / Set / IndexSet). Any other target is a
//! reported, non-fatal error.

use sori_ir::{BinaryOp, Expr, ExprId, ExprKind, Literal, LogicalOp, TokenKind, UnaryOp};

use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// `expression → assignment`
    pub(crate) fn expression(&mut self) -> ParseResult<ExprId> {
        self.assignment()
    }

    fn assignment(&mut self) -> ParseResult<ExprId> {
        let expr = self.or_expression()?;

        if self.cursor.match_kind(&TokenKind::Eq) {
            let equals = self.cursor.previous().clone();
            let value = self.assignment()?;

            let target = self.arena.get(expr);
            let line = target.line;
            let rewritten = match &target.kind {
                ExprKind::Variable { name } => Some(ExprKind::Assign {
                    name: name.clone(),
                    value,
                }),
                ExprKind::Get { object, name } => Some(ExprKind::Set {
                    object: *object,
                    name: name.clone(),
                    value,
                }),
                ExprKind::IndexGet { object, index } => Some(ExprKind::IndexSet {
                    object: *object,
                    index: *index,
                    value,
                }),
                _ => None,
            };
            return match rewritten {
                Some(kind) => Ok(self.arena.alloc(Expr::new(kind, line))),
                None => {
                    self.report(&equals, "Invalid assignment target.");
                    Ok(expr)
                }
            };
        }
        Ok(expr)
    }

    /// `logic_or → logic_and ( "or" logic_and )*`
    fn or_expression(&mut self) -> ParseResult<ExprId> {
        let mut expr = self.and_expression()?;
        while self.cursor.match_kind(&TokenKind::Or) {
            let line = self.cursor.previous().line;
            let right = self.and_expression()?;
            expr = self.arena.alloc(Expr::new(
                ExprKind::Logical {
                    op: LogicalOp::Or,
                    left: expr,
                    right,
                },
                line,
            ));
        }
        Ok(expr)
    }

    /// `logic_and → equality ( "and" equality )*`
    fn and_expression(&mut self) -> ParseResult<ExprId> {
        let mut expr = self.equality()?;
        while self.cursor.match_kind(&TokenKind::And) {
            let line = self.cursor.previous().line;
            let right = self.equality()?;
            expr = self.arena.alloc(Expr::new(
                ExprKind::Logical {
                    op: LogicalOp::And,
                    left: expr,
                    right,
                },
                line,
            ));
        }
        Ok(expr)
    }

    /// `equality → comparison ( ( "!=" | "==" ) comparison )*`
    fn equality(&mut self) -> ParseResult<ExprId> {
        let mut expr = self.comparison()?;
        loop {
            let op = if self.cursor.match_kind(&TokenKind::BangEq) {
                BinaryOp::NotEq
            } else if self.cursor.match_kind(&TokenKind::EqEq) {
                BinaryOp::Eq
            } else {
                break;
            };
            let line = self.cursor.previous().line;
            let right = self.comparison()?;
            expr = self.alloc_binary(op, expr, right, line);
        }
        Ok(expr)
    }

    /// `comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*`
    fn comparison(&mut self) -> ParseResult<ExprId> {
        let mut expr = self.term()?;
        loop {
            let op = if self.cursor.match_kind(&TokenKind::Gt) {
                BinaryOp::Gt
            } else if self.cursor.match_kind(&TokenKind::GtEq) {
                BinaryOp::GtEq
            } else if self.cursor.match_kind(&TokenKind::Lt) {
                BinaryOp::Lt
            } else if self.cursor.match_kind(&TokenKind::LtEq) {
                BinaryOp::LtEq
            } else {
                break;
            };
            let line = self.cursor.previous().line;
            let right = self.term()?;
            expr = self.alloc_binary(op, expr, right, line);
        }
        Ok(expr)
    }

    /// `term → factor ( ( "-" | "+" ) factor )*`
    fn term(&mut self) -> ParseResult<ExprId> {
        let mut expr = self.factor()?;
        loop {
            let op = if self.cursor.match_kind(&TokenKind::Minus) {
                BinaryOp::Sub
            } else if self.cursor.match_kind(&TokenKind::Plus) {
                BinaryOp::Add
            } else {
                break;
            };
            let line = self.cursor.previous().line;
            let right = self.factor()?;
            expr = self.alloc_binary(op, expr, right, line);
        }
        Ok(expr)
    }

    /// `factor → unary ( ( "/" | "*" | "%" ) unary )*`
    fn factor(&mut self) -> ParseResult<ExprId> {
        let mut expr = self.unary()?;
        loop {
            let op = if self.cursor.match_kind(&TokenKind::Slash) {
                BinaryOp::Div
            } else if self.cursor.match_kind(&TokenKind::Star) {
                BinaryOp::Mul
            } else if self.cursor.match_kind(&TokenKind::Percent) {
                BinaryOp::Rem
            } else {
                break;
            };
            let line = self.cursor.previous().line;
            let right = self.unary()?;
            expr = self.alloc_binary(op, expr, right, line);
        }
        Ok(expr)
    }

    /// `unary → ( "!" | "-" ) unary | call`
    fn unary(&mut self) -> ParseResult<ExprId> {
        let op = if self.cursor.match_kind(&TokenKind::Bang) {
            UnaryOp::Not
        } else if self.cursor.match_kind(&TokenKind::Minus) {
            UnaryOp::Neg
        } else {
            return self.call();
        };
        let line = self.cursor.previous().line;
        let operand = self.unary()?;
        Ok(self
            .arena
            .alloc(Expr::new(ExprKind::Unary { op, operand }, line)))
    }

    /// `call → primary ( "(" arguments? ")" | "." IDENT | "[" expression "]" )*`
    fn call(&mut self) -> ParseResult<ExprId> {
        let mut expr = self.primary()?;
        loop {
            if self.cursor.match_kind(&TokenKind::LParen) {
                expr = self.finish_call(expr)?;
            } else if self.cursor.match_kind(&TokenKind::Dot) {
                let name = self.expect(&TokenKind::Ident, "Expect property name after '.'.")?;
                expr = self.arena.alloc(Expr::new(
                    ExprKind::Get {
                        object: expr,
                        name: name.lexeme,
                    },
                    name.line,
                ));
            } else if self.cursor.match_kind(&TokenKind::LBracket) {
                let line = self.cursor.previous().line;
                let index = self.expression()?;
                self.expect(&TokenKind::RBracket, "Expect ']' after index.")?;
                expr = self.arena.alloc(Expr::new(
                    ExprKind::IndexGet {
                        object: expr,
                        index,
                    },
                    line,
                ));
            } else {
                break;
            }
        }
        Ok(expr)
    }

    /// Argument list, the `(` already consumed. Caps at 255 arguments with a
    /// non-fatal diagnostic. The call node carries the closing paren's line —
    /// the call-site token runtime errors point at.
    fn finish_call(&mut self, callee: ExprId) -> ParseResult<ExprId> {
        let mut args = Vec::new();
        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                if args.len() >= 255 {
                    let token = self.cursor.current().clone();
                    self.report(&token, "Can't have more than 255 arguments.");
                }
                args.push(self.expression()?);
                if !self.cursor.match_kind(&TokenKind::Comma) {
                    break;
                }
            }
        }
        let paren = self.expect(&TokenKind::RParen, "Expect ')' after arguments.")?;
        Ok(self
            .arena
            .alloc(Expr::new(ExprKind::Call { callee, args }, paren.line)))
    }

    /// `primary → NUMBER | STRING | "true" | "false" | "nil" | "this"
    /// | "(" expression ")" | "[" elements? "]" | IDENT`
    fn primary(&mut self) -> ParseResult<ExprId> {
        let token = self.cursor.current().clone();
        let kind = match &token.kind {
            TokenKind::False => {
                self.cursor.advance();
                ExprKind::Literal(Literal::Bool(false))
            }
            TokenKind::True => {
                self.cursor.advance();
                ExprKind::Literal(Literal::Bool(true))
            }
            TokenKind::Nil => {
                self.cursor.advance();
                ExprKind::Literal(Literal::Nil)
            }
            TokenKind::Number(n) => {
                self.cursor.advance();
                ExprKind::Literal(Literal::Number(*n))
            }
            TokenKind::Str(s) => {
                self.cursor.advance();
                ExprKind::Literal(Literal::Str(s.clone()))
            }
            TokenKind::This => {
                self.cursor.advance();
                ExprKind::This
            }
            TokenKind::Ident => {
                self.cursor.advance();
                ExprKind::Variable {
                    name: token.lexeme.clone(),
                }
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                self.expect(&TokenKind::RParen, "Expect ')' after expression.")?;
                ExprKind::Grouping(inner)
            }
            TokenKind::LBracket => {
                self.cursor.advance();
                let mut elements = Vec::new();
                if !self.cursor.check(&TokenKind::RBracket) {
                    loop {
                        elements.push(self.expression()?);
                        if !self.cursor.match_kind(&TokenKind::Comma) {
                            break;
                        }
                    }
                }
                self.expect(&TokenKind::RBracket, "Expect ']' after array elements.")?;
                ExprKind::Array { elements }
            }
            _ => return Err(self.error(&token, "Expect expression.")),
        };
        Ok(self.arena.alloc(Expr::new(kind, token.line)))
    }

    fn alloc_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId, line: u32) -> ExprId {
        self.arena
            .alloc(Expr::new(ExprKind::Binary { op, left, right }, line))
    }
}
