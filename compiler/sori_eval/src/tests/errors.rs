//! Runtime error reporting and abort semantics.

use pretty_assertions::assert_eq;

use super::{run_err, run_ok};
use crate::RuntimeErrorKind;

#[test]
fn division_by_zero_aborts_remaining_statements() {
    let (output, error) = run_err("print 1;\nprint 1 / 0;\nprint 2;");
    assert_eq!(error.kind, RuntimeErrorKind::DivisionByZero);
    // Output before the failing statement is kept; nothing after runs.
    assert_eq!(output, "1\n");
}

#[test]
fn modulo_by_zero_is_an_error() {
    let (_, error) = run_err("print 7 % 0;");
    assert_eq!(error.kind, RuntimeErrorKind::ModuloByZero);
}

#[test]
fn dividing_zero_is_fine() {
    assert_eq!(run_ok("print 0 / 5;"), "0\n");
}

#[test]
fn error_carries_the_triggering_line() {
    let (_, error) = run_err("var a = 1;\nvar b = 2;\nprint a * \"x\";\n");
    assert_eq!(error.line, 3);
    assert_eq!(error.message(), "Operands must be numbers.");
}

#[test]
fn undefined_variable_read() {
    let (_, error) = run_err("print missing;");
    assert_eq!(
        error.kind,
        RuntimeErrorKind::UndefinedVariable {
            name: "missing".to_string()
        }
    );
}

#[test]
fn undefined_variable_assignment() {
    let (_, error) = run_err("missing = 1;");
    assert_eq!(
        error.kind,
        RuntimeErrorKind::UndefinedVariable {
            name: "missing".to_string()
        }
    );
}

#[test]
fn error_inside_a_function_aborts_the_whole_run() {
    let source = r#"
fun bad() {
  return nil + 1;
}
print "before";
bad();
print "after";
"#;
    let (output, error) = run_err(source);
    assert_eq!(error.kind, RuntimeErrorKind::AddTypeMismatch);
    assert_eq!(output, "before\n");
}

#[test]
fn error_display_includes_the_line() {
    let (_, error) = run_err("print 1 / 0;");
    assert_eq!(error.to_string(), "Division by zero.\n[line 1]");
}

#[test]
fn declared_but_nil_variable_reads_fine() {
    assert_eq!(run_ok("var a;\nprint a;"), "nil\n");
}

#[test]
fn loop_stops_at_first_error() {
    let source = r#"
var i = 0;
while (i < 5) {
  print i;
  i = i + 1;
  if (i == 2) {
    print nil * 1;
  }
}
"#;
    let (output, error) = run_err(source);
    assert_eq!(error.kind, RuntimeErrorKind::OperandsMustBeNumbers);
    assert_eq!(output, "0\n1\n");
}
