use tinypy::{
    Error,
    error::{EvaluationError, LexicalError, SyntaxError},
    run,
};

fn output_of(src: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    run(src, &mut out)?;
    Ok(String::from_utf8(out).expect("print output is ASCII"))
}

fn assert_output(src: &str, expected: &str) {
    match output_of(src) {
        Ok(out) => assert_eq!(out, expected, "unexpected output for:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match output_of(src) {
        Ok(out) => panic!("Script succeeded but was expected to fail, printed:\n{out}"),
        Err(e) => e,
    }
}

#[test]
fn print_literals_in_order() {
    assert_output("print(1)\nprint(22)\nprint(333)\n", "1\n22\n333\n");
    assert_output("print(0)", "0\n");
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_output("x = 1 + 2\nprint(x)\n", "3\n");
    assert_output("x = 7 * 9\nprint(x)\n", "63\n");
    assert_output("x = 8 - 5\nprint(x)\n", "3\n");
    assert_output("x = 10 // 2\nprint(x)\n", "5\n");
    assert_output("x = 2\nx = x * x\nprint(x)\n", "4\n");
}

#[test]
fn operator_precedence() {
    assert_output("print(1 + 2 * 3)\n", "7\n");
    assert_output("print((1 + 2) * 3)\n", "9\n");
    assert_output("print(10 - 4 - 3)\n", "3\n");
    assert_output("print(100 // 10 // 5)\n", "2\n");
    assert_output("print(1 + 1 == 2 and 3 > 2)\n", "1\n");
    assert_output("print(0 or 1 and 0)\n", "0\n");
    assert_output("print(-2 * 3)\n", "-6\n");
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_output("print(7 // 2)\n", "3\n");
    assert_output("print(-7 // 2)\n", "-3\n");
    assert_output("print(7 // -2)\n", "-3\n");
    assert_output("print(-7 // -2)\n", "3\n");
}

#[test]
fn comparisons_yield_zero_or_one() {
    assert_output("print(2 < 3)\nprint(3 < 2)\n", "1\n0\n");
    assert_output("print(2 <= 2)\nprint(3 >= 4)\n", "1\n0\n");
    assert_output("print(3 > 2)\nprint(2 == 2)\nprint(2 != 2)\n", "1\n1\n0\n");
}

#[test]
fn booleans_and_unary_operators() {
    assert_output("print(True)\nprint(False)\n", "1\n0\n");
    assert_output("print(not 0)\nprint(not 5)\n", "1\n0\n");
    assert_output("print(not not not 0)\n", "1\n");
    assert_output("print(- -3)\n", "3\n");
    assert_output("print(2 and 3)\nprint(0 or 7)\n", "1\n1\n");
}

#[test]
fn logical_operators_short_circuit() {
    assert_output("print(1 or (1 // 0))\n", "1\n");
    assert_output("print(0 and (1 // 0))\n", "0\n");
    assert_output("print(True or undefined)\n", "1\n");
    assert_output("print(False and undefined[3])\n", "0\n");
}

#[test]
fn right_operand_runs_when_needed() {
    assert!(matches!(assert_failure("print(0 or (1 // 0))\n"),
                     Error::Evaluation(EvaluationError::DivisionByZero { line: 1 })));
    assert!(matches!(assert_failure("print(1 and missing)\n"),
                     Error::Evaluation(EvaluationError::UndeclaredIdentifier { .. })));
}

#[test]
fn undeclared_variable_fails_after_earlier_output() {
    let mut out = Vec::new();
    let result = run("print(1)\nprint(x)\nprint(2)\n", &mut out);

    assert!(matches!(result,
                     Err(Error::Evaluation(EvaluationError::UndeclaredIdentifier { ref name,
                                                                                   line: 2 }))
                     if name == "x"));
    assert_eq!(out, b"1\n");
}

#[test]
fn division_by_zero_fails() {
    assert!(matches!(assert_failure("x = 0\nprint(5 // x)\n"),
                     Error::Evaluation(EvaluationError::DivisionByZero { line: 2 })));
}

#[test]
fn overflow_fails() {
    assert!(matches!(assert_failure("print(9223372036854775807 + 1)\n"),
                     Error::Evaluation(EvaluationError::Overflow { .. })));
    assert!(matches!(assert_failure("x = 0 - 9223372036854775807 - 1\nprint(x // -1)\n"),
                     Error::Evaluation(EvaluationError::Overflow { line: 2 })));
}

#[test]
fn list_round_trip() {
    assert_output("a = list()\na.append(5)\nprint(a[0])\n", "5\n");
    assert_output("a = list()\na.append(1)\na.append(2)\na.append(a[0] + a[1])\nprint(a[2])\n",
                  "3\n");
}

#[test]
fn list_out_of_bounds() {
    let err = assert_failure("a = list()\na.append(5)\nprint(a[1])\n");
    assert!(matches!(err,
                     Error::Evaluation(EvaluationError::IndexOutOfBounds { index: 1,
                                                                           len: 1,
                                                                           line: 3,
                                                                           .. })));

    let err = assert_failure("a = list()\nprint(a[-1])\n");
    assert!(matches!(err,
                     Error::Evaluation(EvaluationError::IndexOutOfBounds { index: -1, .. })));
}

#[test]
fn list_init_overwrites_previous_list() {
    let err = assert_failure("a = list()\na.append(5)\na = list()\nprint(a[0])\n");
    assert!(matches!(err,
                     Error::Evaluation(EvaluationError::IndexOutOfBounds { len: 0, .. })));
}

#[test]
fn append_requires_initialized_list() {
    assert!(matches!(assert_failure("a.append(1)\n"),
                     Error::Evaluation(EvaluationError::UndeclaredIdentifier { .. })));
}

#[test]
fn scalar_and_list_confusion_fails_at_run_time() {
    assert!(matches!(assert_failure("x = 3\nprint(x[0])\n"),
                     Error::Evaluation(EvaluationError::WrongKind { expected: "list",
                                                                    actual: "scalar",
                                                                    .. })));
    assert!(matches!(assert_failure("x = 3\nx.append(1)\n"),
                     Error::Evaluation(EvaluationError::WrongKind { expected: "list", .. })));
    assert!(matches!(assert_failure("a = list()\nprint(a)\n"),
                     Error::Evaluation(EvaluationError::WrongKind { expected: "scalar",
                                                                    actual: "list",
                                                                    .. })));
}

#[test]
fn if_elif_else_runs_one_branch() {
    let src = "x = 2\n\
               if x == 1:\n    print(10)\n\
               elif x == 2:\n    print(20)\n\
               elif x == 2:\n    print(30)\n\
               else:\n    print(40)\n";
    assert_output(src, "20\n");

    let src = "x = 9\nif x == 1:\n    print(10)\nelif x == 2:\n    print(20)\nelse:\n    print(40)\n";
    assert_output(src, "40\n");

    let src = "x = 9\nif x == 1:\n    print(10)\nprint(0)\n";
    assert_output(src, "0\n");
}

#[test]
fn while_loop_counts() {
    let src = "i = 0\nwhile i < 3:\n    print(i)\n    i = i + 1\n";
    assert_output(src, "0\n1\n2\n");
}

#[test]
fn break_matches_guarded_loop() {
    let with_break = "i = 0\n\
                      while i < 10:\n    \
                          if i == 4:\n        \
                              break\n    \
                          print(i)\n    \
                          i = i + 1\n";
    let with_guard = "i = 0\n\
                      while i < 10 and i != 4:\n    \
                          print(i)\n    \
                          i = i + 1\n";

    assert_output(with_break, "0\n1\n2\n3\n");
    assert_eq!(output_of(with_break).unwrap(), output_of(with_guard).unwrap());
}

#[test]
fn continue_skips_rest_of_body() {
    let src = "i = 0\n\
               while i < 6:\n    \
                   i = i + 1\n    \
                   if i // 2 * 2 == i:\n        \
                       continue\n    \
                   print(i)\n";
    assert_output(src, "1\n3\n5\n");
}

#[test]
fn break_only_leaves_innermost_loop() {
    let src = "i = 0\n\
               while i < 3:\n    \
                   j = 0\n    \
                   while True:\n        \
                       if j == i:\n            \
                           break\n        \
                       j = j + 1\n    \
                   print(j)\n    \
                   i = i + 1\n";
    assert_output(src, "0\n1\n2\n");
}

#[test]
fn break_outside_loop_is_absorbed() {
    assert_output("print(1)\nbreak\nprint(2)\n", "1\n2\n");
    assert_output("continue\nprint(3)\n", "3\n");
    assert_output("if True:\n    print(1)\n    break\n    print(2)\nprint(3)\n", "1\n3\n");
}

#[test]
fn blank_lines_and_semicolons_are_ignored() {
    assert_output("\n\nx = 1;\n\n;\nif x:\n\n    print(x);\n\n\nprint(2)\n", "1\n2\n");
}

#[test]
fn tabs_count_as_four_spaces() {
    assert_output("if 1:\n\tprint(1)\n    print(2)\n", "1\n2\n");
}

#[test]
fn inconsistent_indentation_fails_before_running() {
    let mut out = Vec::new();
    let src = "print(1)\nif 1:\n    if 1:\n        print(2)\n  print(3)\n";
    let result = run(src, &mut out);

    assert!(matches!(result,
                     Err(Error::Lexical(LexicalError::InconsistentIndentation { width: 2,
                                                                                 line:  5, }))));
    assert!(out.is_empty());
}

#[test]
fn syntax_errors_are_reported() {
    assert!(matches!(assert_failure("if x\n    print(1)\n"),
                     Error::Syntax(SyntaxError::UnexpectedToken { line: 1, .. })));
    assert!(matches!(assert_failure("print(1 +)\n"), Error::Syntax(_)));
    assert!(matches!(assert_failure("5 = x\n"), Error::Syntax(_)));
    assert!(matches!(assert_failure("\n\n"), Error::Syntax(SyntaxError::EmptyProgram)));
}

#[test]
fn lexical_errors_are_reported() {
    assert!(matches!(assert_failure("print(!1)\n"),
                     Error::Lexical(LexicalError::UnexpectedCharacter { character: '!', .. })));
    assert!(matches!(assert_failure("x = 4 / 2\n"),
                     Error::Lexical(LexicalError::UnexpectedCharacter { character: '/', .. })));
    assert!(matches!(assert_failure("x = 1\ny = $\n"),
                     Error::Lexical(LexicalError::StrayCharacter { character: '$', line: 2 })));
}

#[test]
fn running_twice_is_idempotent() {
    let src = "a = list()\ni = 0\nwhile i < 5:\n    a.append(i * i)\n    i = i + 1\n\
               i = 0\nwhile i < 5:\n    print(a[i])\n    i = i + 1\n";

    let first = output_of(src).unwrap();
    let second = output_of(src).unwrap();

    assert_eq!(first, "0\n1\n4\n9\n16\n");
    assert_eq!(first, second);
}

#[test]
fn error_messages_name_the_line() {
    let err = assert_failure("x = 1\nprint(y)\n");
    assert_eq!(err.to_string(), "Error on line 2: Undeclared identifier 'y'.");
}
