//! Lexical scoping and closures.

use pretty_assertions::assert_eq;

use super::run_ok;

#[test]
fn inner_declaration_shadows_outer() {
    let source = r#"
var a = "global";
{
  var a = "inner";
  print a;
}
print a;
"#;
    assert_eq!(run_ok(source), "inner\nglobal\n");
}

#[test]
fn assignment_reaches_the_outer_binding() {
    let source = r#"
var a = 1;
{
  a = 2;
}
print a;
"#;
    assert_eq!(run_ok(source), "2\n");
}

#[test]
fn assignment_through_a_shadow_never_touches_outer() {
    let source = r#"
var a = 1;
{
  var a = 10;
  a = 20;
  print a;
}
print a;
"#;
    assert_eq!(run_ok(source), "20\n1\n");
}

#[test]
fn counter_factory_closures_are_independent() {
    let source = r#"
fun makeCounter() {
  var count = 0;
  fun increment() {
    count = count + 1;
    return count;
  }
  return increment;
}
var a = makeCounter();
var b = makeCounter();
print a();
print a();
print b();
"#;
    assert_eq!(run_ok(source), "1\n2\n1\n");
}

#[test]
fn closure_captures_declaration_environment_not_call_site() {
    // The classic pin: a later same-named declaration in the block must not
    // change what the already-resolved closure body sees.
    let source = r#"
var a = "global";
{
  fun showA() {
    print a;
  }
  showA();
  var a = "block";
  showA();
}
"#;
    assert_eq!(run_ok(source), "global\nglobal\n");
}

#[test]
fn closure_outlives_its_creating_frame() {
    let source = r#"
fun outer() {
  var local = "escaped";
  fun inner() {
    return local;
  }
  return inner;
}
var f = outer();
print f();
"#;
    assert_eq!(run_ok(source), "escaped\n");
}

#[test]
fn closures_share_their_captured_variable() {
    let source = r#"
fun pair() {
  var n = 0;
  fun get() { return n; }
  fun bump() { n = n + 1; return n; }
  bump();
  bump();
  return get;
}
print pair()();
"#;
    assert_eq!(run_ok(source), "2\n");
}

#[test]
fn global_redefinition_is_allowed() {
    assert_eq!(run_ok("var a = 1;\nvar a = 2;\nprint a;"), "2\n");
}

#[test]
fn block_environment_is_fresh_per_entry() {
    let source = r#"
var i = 0;
while (i < 2) {
  var x = i;
  print x;
  i = i + 1;
}
"#;
    assert_eq!(run_ok(source), "0\n1\n");
}
