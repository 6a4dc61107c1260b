use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexicalError {
    /// A line was dedented to a width that matches no enclosing block.
    #[error("Error on line {line}: Inconsistent indentation, width {width} matches no enclosing block.")]
    InconsistentIndentation {
        /// The indentation width of the offending line.
        width: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A character that starts an operator was not followed by what the
    /// operator requires, such as a lone `!` or `/`.
    #[error("Error on line {line}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A character that cannot start any token.
    #[error("Error on line {line}: Stray character '{character}'.")]
    StrayCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An integer literal does not fit in 64 bits.
    #[error("Error on line {line}: Integer literal {literal} is too large.")]
    LiteralTooLarge {
        /// The literal as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl LexicalError {
    /// Returns the 1-based source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InconsistentIndentation { line, .. }
            | Self::UnexpectedCharacter { line, .. }
            | Self::StrayCharacter { line, .. }
            | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}
