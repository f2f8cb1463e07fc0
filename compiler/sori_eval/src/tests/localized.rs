//! End-to-end scripts written with the Hangul keyword aliases.

use pretty_assertions::assert_eq;

use super::run_ok;

#[test]
fn hangul_while_loop() {
    let source = r#"
변수 i = 0;
조건반복 (i < 3) {
  출력 i;
  i = i + 1;
}
"#;
    assert_eq!(run_ok(source), "0\n1\n2\n");
}

#[test]
fn hangul_for_loop_with_break() {
    let source = r#"
범위반복 (변수 i = 0; 참; i = i + 1) {
  만약 (i == 2) 중단;
  출력 i;
}
"#;
    assert_eq!(run_ok(source), "0\n1\n");
}

#[test]
fn hangul_function_and_identifiers() {
    let source = r#"
함수 더하기(왼쪽, 오른쪽) {
  반환 왼쪽 + 오른쪽;
}
출력 더하기(1, 2);
"#;
    assert_eq!(run_ok(source), "3\n");
}

#[test]
fn alphabets_mix_freely() {
    let source = r#"
var 합계 = 0;
범위반복 (var i = 1; i <= 3; i = i + 1) {
  합계 = 합계 + i;
}
print 합계;
"#;
    assert_eq!(run_ok(source), "6\n");
}

#[test]
fn hangul_nil_and_logic() {
    assert_eq!(run_ok("출력 널 또는 \"기본값\";"), "기본값\n");
    assert_eq!(run_ok("출력 거짓 그리고 참;"), "false\n");
}
