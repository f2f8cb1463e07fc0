//! Behavioral test suites for the evaluator.
//!
//! Each suite drives full source through the real scanner, parser, and
//! resolver, then interprets with a buffer print handler and asserts on the
//! captured output and/or the runtime error.

mod errors;
mod functions;
mod localized;
mod operators;
mod scope;

use std::rc::Rc;

use crate::{EvalContext, Interpreter, PrintHandler, RuntimeError};

/// Run `source` end to end; panics on static diagnostics.
fn run(source: &str) -> (String, Option<RuntimeError>) {
    let (tokens, lex_diagnostics) = sori_lexer::scan(source);
    assert!(lex_diagnostics.is_empty(), "lexical errors: {lex_diagnostics:?}");
    let (program, parse_diagnostics) = sori_parse::parse(&tokens);
    assert!(parse_diagnostics.is_empty(), "syntax errors: {parse_diagnostics:?}");
    let (resolution, resolve_diagnostics) = sori_resolve::resolve(&program);
    assert!(
        resolve_diagnostics.is_empty(),
        "resolve errors: {resolve_diagnostics:?}"
    );

    let (handler, buffer) = PrintHandler::buffer();
    let mut interpreter = Interpreter::with_print_handler(handler);
    let context = EvalContext::new(Rc::new(program.arena), Rc::new(resolution));
    let error = interpreter.interpret(&program.statements, context).err();
    let output = buffer.borrow().clone();
    (output, error)
}

/// Run `source` and return its output; panics on any error.
fn run_ok(source: &str) -> String {
    let (output, error) = run(source);
    if let Some(error) = error {
        panic!("unexpected runtime error: {error} (output so far: {output:?})");
    }
    output
}

/// Run `source` expecting a runtime error; returns (output-before-error, error).
fn run_err(source: &str) -> (String, RuntimeError) {
    let (output, error) = run(source);
    let Some(error) = error else {
        panic!("expected a runtime error, got output {output:?}");
    };
    (output, error)
}
