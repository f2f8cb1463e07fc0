//! Pipeline driver for the Sori interpreter.
//!
//! [`Session::execute`] drives scan → parse → resolve → evaluate over one
//! source text. Any lexical, syntax, or static-semantic diagnostic suppresses
//! evaluation entirely and all of them are surfaced together; otherwise the
//! program runs and the first runtime error is surfaced as a diagnostic and
//! aborts the remaining statements.
//!
//! A `Session` owns one interpreter, so global declarations persist across
//! `execute` calls — the REPL feeds lines into a single session.


use std::rc::Rc;

use sori_diagnostic::Diagnostic;
use sori_eval::{EvalContext, Interpreter};

pub use sori_eval::PrintHandler;

/// One interpreter plus the error flags the host maps to exit codes.
pub struct Session {
    interpreter: Interpreter,
    had_error: bool,
    had_runtime_error: bool,
}

impl Session {
    /// A session printing to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(PrintHandler::Stdout)
    }

    /// A session with a custom print destination.
    pub fn with_print_handler(printer: PrintHandler) -> Self {
        Session {
            interpreter: Interpreter::with_print_handler(printer),
            had_error: false,
            had_runtime_error: false,
        }
    }

    /// Run one source text through the full pipeline. Returns every
    /// diagnostic the run produced; evaluation only happens when the static
    /// stages were clean.
    pub fn execute(&mut self, source: &str) -> Vec<Diagnostic> {
        let (tokens, mut diagnostics) = sori_lexer::scan(source);

        let (program, parse_diagnostics) = sori_parse::parse(&tokens);
        diagnostics.extend(parse_diagnostics);

        let (resolution, resolve_diagnostics) = sori_resolve::resolve(&program);
        diagnostics.extend(resolve_diagnostics);

        if !diagnostics.is_empty() {
            self.had_error = true;
            return diagnostics;
        }

        let context = EvalContext::new(Rc::new(program.arena), Rc::new(resolution));
        if let Err(error) = self.interpreter.interpret(&program.statements, context) {
            self.had_runtime_error = true;
            diagnostics.push(Diagnostic::error(error.line, error.message()));
        }
        diagnostics
    }

    /// Whether any static (lexical/syntax/resolve) error has been reported.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Whether any runtime error has been reported.
    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clear the static-error flag; the REPL does this after each line so a
    /// typo doesn't condemn the rest of the session.
    pub fn clear_error(&mut self) {
        self.had_error = false;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
