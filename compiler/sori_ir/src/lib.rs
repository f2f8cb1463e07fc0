//! Token and AST definitions for the Sori interpreter.
//!
//! This crate is the shared vocabulary of the pipeline: the lexer produces
//! [`Token`]s, the parser allocates [`Expr`]s into an [`ExprArena`] and builds
//! [`Stmt`] trees, and the resolver and evaluator consume both. It has no
//! dependencies so that external tools can use the data model without pulling
//! in the rest of the interpreter.

mod ast;
mod token;

pub use ast::{
    BinaryOp, ClassDecl, Expr, ExprArena, ExprId, ExprKind, FunctionDecl, Literal, LogicalOp,
    Param, Program, Stmt, UnaryOp,
};
pub use token::{Token, TokenKind};
