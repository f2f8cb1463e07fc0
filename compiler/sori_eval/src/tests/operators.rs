//! Operator and coercion semantics.

use pretty_assertions::assert_eq;

use super::{run_err, run_ok};
use crate::RuntimeErrorKind;

#[test]
fn arithmetic_matches_ieee_double() {
    assert_eq!(run_ok("print 1 + 2 * 3;"), "7\n");
    assert_eq!(run_ok("print 10 / 4;"), "2.5\n");
    assert_eq!(run_ok("print 7 % 2;"), "1\n");
    assert_eq!(run_ok("print 0.1 + 0.2 == 0.3;"), "false\n");
}

#[test]
fn grouping_overrides_precedence() {
    assert_eq!(run_ok("print (1 + 2) * 3;"), "9\n");
}

#[test]
fn unary_minus_and_not() {
    assert_eq!(run_ok("print -3;"), "-3\n");
    assert_eq!(run_ok("print --3;"), "3\n");
    assert_eq!(run_ok("print !nil;"), "true\n");
    assert_eq!(run_ok("print !0;"), "false\n");
    assert_eq!(run_ok("print !\"\";"), "false\n");
}

#[test]
fn string_number_concatenation() {
    assert_eq!(run_ok("print \"x=\" + 5;"), "x=5\n");
    assert_eq!(run_ok("print 5 + \"x\";"), "5x\n");
    assert_eq!(run_ok("print \"a\" + \"b\";"), "ab\n");
    // Whole doubles concatenate without a trailing .0, fractions keep it.
    assert_eq!(run_ok("print \"v\" + 2.0;"), "v2\n");
    assert_eq!(run_ok("print \"v\" + 2.5;"), "v2.5\n");
}

#[test]
fn comparison_operators() {
    assert_eq!(run_ok("print 1 < 2;"), "true\n");
    assert_eq!(run_ok("print 2 <= 2;"), "true\n");
    assert_eq!(run_ok("print 3 > 4;"), "false\n");
    assert_eq!(run_ok("print 4 >= 5;"), "false\n");
}

#[test]
fn equality_rules() {
    assert_eq!(run_ok("print nil == nil;"), "true\n");
    assert_eq!(run_ok("print nil == false;"), "false\n");
    assert_eq!(run_ok("print 1 == 1;"), "true\n");
    assert_eq!(run_ok("print \"a\" == \"a\";"), "true\n");
    assert_eq!(run_ok("print 1 == \"1\";"), "false\n");
    assert_eq!(run_ok("print 1 != 2;"), "true\n");
}

#[test]
fn logical_operators_return_operand_values() {
    assert_eq!(run_ok("print nil or \"default\";"), "default\n");
    assert_eq!(run_ok("print \"first\" or \"second\";"), "first\n");
    assert_eq!(run_ok("print nil and \"never\";"), "nil\n");
    assert_eq!(run_ok("print 1 and 2;"), "2\n");
}

#[test]
fn logical_operators_short_circuit() {
    // The right side would be an undefined-variable error if evaluated.
    assert_eq!(run_ok("print true or missing;"), "true\n");
    assert_eq!(run_ok("print false and missing;"), "false\n");
}

#[test]
fn truthiness_in_conditions() {
    assert_eq!(run_ok("if (0) print \"zero is truthy\";"), "zero is truthy\n");
    assert_eq!(run_ok("if (\"\") print \"empty is truthy\";"), "empty is truthy\n");
    assert_eq!(run_ok("if (nil) print \"no\"; else print \"nil is falsy\";"), "nil is falsy\n");
}

#[test]
fn comparison_requires_numbers() {
    let (_, error) = run_err("print 1 < \"two\";");
    assert_eq!(error.kind, RuntimeErrorKind::OperandsMustBeNumbers);
}

#[test]
fn add_rejects_other_mixes() {
    let (_, error) = run_err("print nil + 1;");
    assert_eq!(error.kind, RuntimeErrorKind::AddTypeMismatch);
    let (_, error) = run_err("print true + \"x\";");
    assert_eq!(error.kind, RuntimeErrorKind::AddTypeMismatch);
}

#[test]
fn negation_requires_a_number() {
    let (_, error) = run_err("print -\"abc\";");
    assert_eq!(error.kind, RuntimeErrorKind::OperandMustBeNumber);
}
