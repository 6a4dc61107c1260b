use thiserror::Error;

/// Lexical errors.
///
/// Raised while turning source text into tokens: stray characters, malformed
/// operators, oversized literals and inconsistent indentation.
pub mod lex_error;
/// Syntax errors.
///
/// Raised by the parser when the token stream does not follow the grammar or
/// the block structure encoded by `INDENT`/`DEDENT` tokens.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while executing a program,
/// such as division by zero, undeclared identifiers or out-of-bounds list
/// access.
pub mod eval_error;

pub use eval_error::EvaluationError;
pub use lex_error::LexicalError;
pub use syntax_error::SyntaxError;

/// Any failure produced by the lex, parse and evaluate pipeline.
///
/// Each stage has its own error type; this enum lets callers that run the
/// whole pipeline propagate any of them with `?`.
#[derive(Debug, Error)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    /// The token stream could not be parsed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The program failed while running.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    /// Reading the source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
