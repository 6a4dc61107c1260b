use tinypy::{
    ast::{Expr, IfStatement, MathOperator, Program, RelOperator, Statement, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::tokenize,
        parser::parse,
        token::{Token, TokenKind},
    },
};

fn parse_source(src: &str) -> Result<Program, SyntaxError> {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("Tokenizing failed: {e}"));
    parse(&tokens)
}

fn normalized(src: &str) -> String {
    parse_source(src).unwrap_or_else(|e| panic!("Parsing failed: {e}"))
                     .to_string()
}

fn variable(name: &str, line: usize) -> Expr {
    Expr::Variable { name: name.to_string(),
                     line }
}

fn constant(value: i64) -> Expr {
    Expr::Constant { value }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(normalized("x = 1 + 2 * 3 - 4"), "x = ((1 + (2 * 3)) - 4)\n");
    assert_eq!(normalized("x = (1 + 2) * 3"), "x = ((1 + 2) * 3)\n");
}

#[test]
fn binary_layers_are_left_associative() {
    assert_eq!(normalized("x = 8 - 2 - 1"), "x = ((8 - 2) - 1)\n");
    assert_eq!(normalized("x = 64 // 4 // 2"), "x = ((64 // 4) // 2)\n");
    assert_eq!(normalized("x = a < b < c"), "x = ((a < b) < c)\n");
    assert_eq!(normalized("x = a == b != c"), "x = ((a == b) != c)\n");
    assert_eq!(normalized("x = a or b or c"), "x = ((a or b) or c)\n");
    assert_eq!(normalized("x = a and b and c"), "x = ((a and b) and c)\n");
}

#[test]
fn logical_layers_bind_loosest() {
    assert_eq!(normalized("x = a or b and c == d < e + 1"),
               "x = (a or (b and (c == (d < (e + 1)))))\n");
}

#[test]
fn unary_operators_bind_tightest_and_nest() {
    assert_eq!(normalized("x = not a == b"), "x = (not a == b)\n");
    assert_eq!(normalized("x = -a * b"), "x = (-a * b)\n");

    let program = parse_source("x = not not -y").unwrap();
    let Statement::Definition { value, .. } = &program.statements[0] else {
        panic!("expected a definition");
    };

    let negate = Expr::Unary { op:      UnaryOperator::Negate,
                               operand: Box::new(variable("y", 1)),
                               line:    1, };
    let inner = Expr::Unary { op:      UnaryOperator::Not,
                              operand: Box::new(negate),
                              line:    1, };
    let outer = Expr::Unary { op:      UnaryOperator::Not,
                              operand: Box::new(inner),
                              line:    1, };
    assert_eq!(*value, outer);
}

#[test]
fn booleans_become_constants() {
    let program = parse_source("print(True and False)").unwrap();

    assert_eq!(program.statements,
               [Statement::Print { value: Expr::And { left:  Box::new(constant(1)),
                                                      right: Box::new(constant(0)), },
                                   line:  1, }]);
}

#[test]
fn simple_statement_forms() {
    let src = "a = list()\na.append(x[i + 1])\nx = 3\nprint(x)\nwhile 1:\n    break\n    continue\n";
    let program = parse_source(src).unwrap();

    let index = Expr::Math { op:    MathOperator::Add,
                             left:  Box::new(variable("i", 2)),
                             right: Box::new(constant(1)),
                             line:  2, };

    assert_eq!(program.statements,
               [Statement::ListInit { name: "a".to_string(),
                                      line: 1, },
                Statement::ListAppend { name:  "a".to_string(),
                                        value: Expr::ListAccess { name:  "x".to_string(),
                                                                  index: Box::new(index),
                                                                  line:  2, },
                                        line:  2, },
                Statement::Definition { name:  "x".to_string(),
                                        value: constant(3),
                                        line:  3, },
                Statement::Print { value: variable("x", 4),
                                   line:  4, },
                Statement::While { condition: constant(1),
                                   body:      vec![Statement::Break { line: 6 },
                                                   Statement::Continue { line: 7 }],
                                   line:      5, }]);
}

#[test]
fn elif_nests_and_else_attaches_to_innermost() {
    let src = "if a:\n    x = 1\nelif b:\n    x = 2\nelse:\n    x = 3\n";
    let program = parse_source(src).unwrap();

    let elif = IfStatement { condition: variable("b", 3),
                             body:      vec![Statement::Definition { name:  "x".to_string(),
                                                                     value: constant(2),
                                                                     line:  4, }],
                             else_body: vec![Statement::Definition { name:  "x".to_string(),
                                                                     value: constant(3),
                                                                     line:  6, }],
                             elif:      None,
                             line:      3, };
    let expected = IfStatement { condition: variable("a", 1),
                                 body:      vec![Statement::Definition { name:  "x".to_string(),
                                                                         value: constant(1),
                                                                         line:  2, }],
                                 else_body: Vec::new(),
                                 elif:      Some(Box::new(elif)),
                                 line:      1, };

    assert_eq!(program.statements, [Statement::If(expected)]);
}

#[test]
fn comparison_operators_map_to_nodes() {
    let program = parse_source("x = a >= 2").unwrap();

    assert_eq!(program.statements,
               [Statement::Definition { name:  "x".to_string(),
                                        value: Expr::Relational { op:    RelOperator::GreaterEqual,
                                                                  left:  Box::new(variable("a", 1)),
                                                                  right: Box::new(constant(2)), },
                                        line:  1, }]);
}

#[test]
fn blank_lines_inside_blocks_are_skipped() {
    let src = "while x:\n\n    x = x - 1\n\n\n    print(x)\n\nprint(0)\n";
    assert_eq!(normalized(src), "while x:\n    x = (x - 1)\n    print(x)\nprint(0)\n");
}

#[test]
fn statements_report_their_lines() {
    let program = parse_source("\n\nx = 1\n\nif x:\n    print(x)\n").unwrap();
    let lines: Vec<usize> = program.statements.iter().map(Statement::line).collect();

    assert_eq!(lines, [3, 5]);
}

#[test]
fn normal_form_is_a_fixed_point() {
    let src = "a = list()\ni = 0\nwhile i < 10 and not i == 7:\n  if i // 2 * 2 == i:\n    \
               a.append(-i)\n  elif i > 4:\n    continue\n  else:\n    break\n  i = i + 1\n\
               print(a[0])\n";

    let once = normalized(src);
    let twice = normalized(&once);

    assert_eq!(once, twice);
    assert!(once.contains("\n    if (((i // 2) * 2) == i):\n        a.append(-i)\n"));
}

#[test]
fn missing_colon_is_reported() {
    let err = parse_source("if x\n    print(1)\n").unwrap_err();

    assert_eq!(err,
               SyntaxError::UnexpectedToken { found:    "NEWLINE (line 1, column 5)".to_string(),
                                              expected: "':'".to_string(),
                                              line:     1,
                                              column:   5, });
    assert_eq!(err.to_string(),
               "Error on line 1: Unexpected token NEWLINE (line 1, column 5). Expected ':' \
                instead.");
}

#[test]
fn block_requires_indent() {
    let err = parse_source("while x:\nprint(1)\n").unwrap_err();
    assert!(matches!(err, SyntaxError::UnexpectedToken { ref expected, line: 2, .. }
                          if expected == "INDENT"));

    assert!(parse_source("while x:\n\n\n").is_err());
}

#[test]
fn trailing_tokens_after_simple_statement_are_rejected() {
    let err = parse_source("x = 1 2\n").unwrap_err();
    assert!(matches!(err, SyntaxError::UnexpectedToken { ref found, .. }
                          if found.starts_with("<CONST, 2>")));

    assert!(parse_source("print(1) print(2)\n").is_err());
}

#[test]
fn invalid_statement_starts_are_rejected() {
    for src in ["else:\n    x = 1\n", "elif x:\n    x = 1\n", "1 = x\n", "(x) = 1\n", "list()\n"] {
        assert!(matches!(parse_source(src), Err(SyntaxError::UnexpectedToken { line: 1, .. })),
                "source: {src}");
    }
}

#[test]
fn malformed_expressions_are_rejected() {
    for src in ["x = \n", "x = (1 + 2\n", "x = a[1\n", "print 1\n", "x = 1 +\n", "a.push(1)\n",
                "x = list(1)\n"]
    {
        assert!(parse_source(src).is_err(), "source: {src}");
    }
}

#[test]
fn empty_program_is_rejected() {
    assert_eq!(parse_source("").unwrap_err(), SyntaxError::EmptyProgram);
    assert_eq!(parse_source("\n;\n  \n").unwrap_err(), SyntaxError::EmptyProgram);
}

#[test]
fn truncated_token_stream_is_reported() {
    let tokens = [Token::new(TokenKind::Id, "x", 1, 1),
                  Token::new(TokenKind::Assign, "=", 1, 3),
                  Token::new(TokenKind::Const, "1", 1, 5)];

    assert!(matches!(parse(&tokens), Err(SyntaxError::UnexpectedEndOfInput { .. })));
}
