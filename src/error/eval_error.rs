use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur during evaluation.
pub enum EvaluationError {
    /// Tried to read a name that was never bound.
    #[error("Error on line {line}: Undeclared identifier '{name}'.")]
    UndeclaredIdentifier {
        /// The name of the variable or list.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Used a scalar as a list, or a list as a scalar.
    #[error("Error on line {line}: '{name}' is a {actual}, not a {expected}.")]
    WrongKind {
        /// The name that was used.
        name:     String,
        /// What the statement or expression needed (`"list"` or `"scalar"`).
        expected: &'static str,
        /// What the name is actually bound to.
        actual:   &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Tried to access a list element outside the list.
    #[error("Error on line {line}: Index {index} out of bounds for list '{name}' of length {len}.")]
    IndexOutOfBounds {
        /// The name of the list.
        name:  String,
        /// The index that was requested.
        index: i64,
        /// The current length of the list.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted integer division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic overflowed 64-bit signed integers.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing `print` output to the sink failed.
    #[error("Failed to write program output: {0}")]
    Output(#[from] std::io::Error),
}
