use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum SyntaxError {
    /// Found a token that the grammar does not allow at this point.
    #[error("Error on line {line}: Unexpected token {found}. Expected {expected} instead.")]
    UnexpectedToken {
        /// The token encountered, rendered for display.
        found:    String,
        /// A description of the tokens that would have been accepted.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// The token stream ended before the construct was complete.
    #[error("Unexpected end of input. Expected {expected}.")]
    UnexpectedEndOfInput {
        /// A description of the tokens that would have been accepted.
        expected: String,
    },
    /// The program contains no statements.
    #[error("Empty program: at least one statement is required.")]
    EmptyProgram,
}
