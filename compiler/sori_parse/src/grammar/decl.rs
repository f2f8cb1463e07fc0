//! Declaration parsing.
//!
//! `declaration → classDecl | funDecl | varDecl | statement`. This is the
//! recovery boundary: a syntax error anywhere below lands here, synchronizes,
//! and drops the broken statement so later statements still parse.

use std::rc::Rc;

use sori_ir::{ClassDecl, FunctionDecl, Param, Stmt, TokenKind};

use crate::{ParseResult, Parser};

impl Parser<'_> {
    pub(crate) fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.cursor.match_kind(&TokenKind::Class) {
            self.class_declaration()
        } else if self.cursor.match_kind(&TokenKind::Fun) {
            self.function_declaration("function").map(Stmt::Function)
        } else if self.cursor.match_kind(&TokenKind::Var) {
            self.var_declaration()
        } else {
            self.statement()
        };
        match result {
            Ok(stmt) => Some(stmt),
            Err(_) => {
                self.synchronize();
                None
            }
        }
    }

    /// `classDecl → "class" IDENT "{" function* "}"`
    fn class_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.expect(&TokenKind::Ident, "Expect class name.")?;
        self.expect(&TokenKind::LBrace, "Expect '{' before class body.")?;

        let mut methods = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) && !self.cursor.is_at_end() {
            methods.push(self.function_declaration("method")?);
        }
        self.expect(&TokenKind::RBrace, "Expect '}' after class body.")?;

        Ok(Stmt::Class(Rc::new(ClassDecl {
            name: name.lexeme,
            line: name.line,
            methods,
        })))
    }

    /// `function → IDENT "(" parameters? ")" block`
    ///
    /// `kind` is "function" or "method", used only in messages.
    pub(crate) fn function_declaration(&mut self, kind: &str) -> ParseResult<Rc<FunctionDecl>> {
        let name = self.expect(&TokenKind::Ident, &format!("Expect {kind} name."))?;
        self.expect(
            &TokenKind::LParen,
            &format!("Expect '(' after {kind} name."),
        )?;

        let mut params = Vec::new();
        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                if params.len() >= 255 {
                    let token = self.cursor.current().clone();
                    self.report(&token, "Can't have more than 255 parameters.");
                }
                let param = self.expect(&TokenKind::Ident, "Expect parameter name.")?;
                params.push(Param {
                    name: param.lexeme,
                    line: param.line,
                });
                if !self.cursor.match_kind(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen, "Expect ')' after parameters.")?;

        self.expect(
            &TokenKind::LBrace,
            &format!("Expect '{{' before {kind} body."),
        )?;
        let body = self.block()?;

        Ok(Rc::new(FunctionDecl {
            name: name.lexeme,
            line: name.line,
            params,
            body,
        }))
    }

    /// `varDecl → "var" IDENT ( "=" expression )? ";"`, the `var` consumed.
    ///
    /// Also used for the initializer clause of a `for`.
    pub(crate) fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.expect(&TokenKind::Ident, "Expect variable name.")?;

        let initializer = if self.cursor.match_kind(&TokenKind::Eq) {
            Some(self.expression()?)
        } else {
            None
        };
        self.expect(
            &TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        )?;

        Ok(Stmt::Var {
            name: name.lexeme,
            line: name.line,
            initializer,
        })
    }
}
