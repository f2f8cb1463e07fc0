//! Function declaration, calls, arity, and natives.

use pretty_assertions::assert_eq;

use super::{run_err, run_ok};
use crate::RuntimeErrorKind;

#[test]
fn declared_function_is_callable() {
    let source = r#"
fun add(a, b) {
  return a + b;
}
print add(1, 2);
"#;
    assert_eq!(run_ok(source), "3\n");
}

#[test]
fn falling_off_the_end_returns_nil() {
    assert_eq!(run_ok("fun f() {}\nprint f();"), "nil\n");
}

#[test]
fn bare_return_yields_nil() {
    assert_eq!(run_ok("fun f() { return; }\nprint f();"), "nil\n");
}

#[test]
fn return_stops_the_body() {
    let source = r#"
fun f() {
  print "before";
  return 1;
  print "after";
}
print f();
"#;
    assert_eq!(run_ok(source), "before\n1\n");
}

#[test]
fn recursion_works() {
    let source = r#"
fun fib(n) {
  if (n < 2) return n;
  return fib(n - 1) + fib(n - 2);
}
print fib(10);
"#;
    assert_eq!(run_ok(source), "55\n");
}

#[test]
fn functions_are_first_class() {
    let source = r#"
fun twice(f, x) {
  return f(f(x));
}
fun addOne(n) {
  return n + 1;
}
print twice(addOne, 5);
"#;
    assert_eq!(run_ok(source), "7\n");
}

#[test]
fn forward_reference_between_globals() {
    let source = r#"
fun a() { return b(); }
fun b() { return "forward"; }
print a();
"#;
    assert_eq!(run_ok(source), "forward\n");
}

#[test]
fn arity_mismatch_names_both_counts() {
    let (_, error) = run_err("fun f(a, b) {}\nf(1, 2, 3);");
    assert_eq!(
        error.kind,
        RuntimeErrorKind::ArityMismatch {
            expected: 2,
            got: 3
        }
    );
    assert_eq!(error.message(), "Expected 2 arguments but got 3.");
}

#[test]
fn too_few_arguments_is_also_a_mismatch() {
    let (_, error) = run_err("fun f(a, b) {}\nf(1);");
    assert_eq!(
        error.kind,
        RuntimeErrorKind::ArityMismatch {
            expected: 2,
            got: 1
        }
    );
}

#[test]
fn calling_a_non_callable_fails() {
    let (_, error) = run_err("\"text\"(1);");
    assert_eq!(error.kind, RuntimeErrorKind::NotCallable);
    let (_, error) = run_err("var x = 4; x();");
    assert_eq!(error.kind, RuntimeErrorKind::NotCallable);
}

#[test]
fn function_prints_with_its_name() {
    assert_eq!(run_ok("fun greet() {}\nprint greet;"), "<fn greet>\n");
}

#[test]
fn clock_native_is_available() {
    assert_eq!(run_ok("print clock() > 0;"), "true\n");
}

#[test]
fn clock_rejects_arguments() {
    let (_, error) = run_err("clock(1);");
    assert_eq!(
        error.kind,
        RuntimeErrorKind::ArityMismatch {
            expected: 0,
            got: 1
        }
    );
}

#[test]
fn arguments_evaluate_left_to_right() {
    let source = r#"
var log = "";
fun tag(x) {
  log = log + x;
  return x;
}
fun three(a, b, c) {}
three(tag("a"), tag("b"), tag("c"));
print log;
"#;
    assert_eq!(run_ok(source), "abc\n");
}
