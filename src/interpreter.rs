/// The evaluator module executes the syntax tree.
///
/// The evaluator walks the AST, runs statements for effect and evaluates
/// expressions to integers, mutating the symbol store and writing `print`
/// output. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every statement and expression variant.
/// - Implements short-circuit `and`/`or` and loop control with `break` and
///   `continue`.
/// - Reports runtime errors such as division by zero or undeclared names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// literals, identifiers, keywords and operators, plus the structural
/// `NEWLINE`, `INDENT`, `DEDENT` and `ENDMARKER` markers derived from line
/// breaks and leading whitespace.
///
/// # Responsibilities
/// - Converts the input text into tokens with line and column.
/// - Tracks indentation with a stack of block widths.
/// - Reports lexical errors for invalid characters or inconsistent
///   indentation.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Recursive descent with one function per precedence layer for expressions
/// and an explicit block template for compound statements.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar and block structure, reporting the first error with
///   the offending token.
pub mod parser;
/// Variable storage for a running program.
///
/// Holds scalar variables and integer lists in two separate name spaces.
pub mod symbols;
/// The token vocabulary shared by the lexer and the parser.
pub mod token;
