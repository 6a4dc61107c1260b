use crate::{
    error::LexicalError,
    interpreter::token::{Token, TokenKind},
};

/// Tracks indentation levels for indentation-based syntax.
///
/// The stack always holds at least the base width `0`. Widths on the stack are
/// strictly increasing from bottom to top.
#[derive(Debug)]
pub struct IndentationTracker {
    indent_stack: Vec<usize>,
}

impl IndentationTracker {
    /// Creates a tracker with only the base width `0` open.
    #[must_use]
    pub fn new() -> Self {
        Self { indent_stack: vec![0] }
    }

    /// Returns the width of the innermost open block.
    #[must_use]
    pub fn current(&self) -> usize {
        self.indent_stack.last().copied().unwrap_or(0)
    }

    /// Compares the width of a new logical line against the stack.
    ///
    /// A wider line opens one block and yields a single `INDENT`. A narrower
    /// line closes blocks, one `DEDENT` each, until the top of the stack is no
    /// wider than the line; it must then match exactly.
    ///
    /// # Errors
    /// Returns [`LexicalError::InconsistentIndentation`] if the width falls
    /// strictly between two open block widths.
    ///
    /// # Example
    /// ```
    /// use tinypy::interpreter::{lexer::indentation::IndentationTracker, token::TokenKind};
    ///
    /// let mut tracker = IndentationTracker::new();
    /// assert_eq!(tracker.process_indentation(4, 2).unwrap()[0].kind, TokenKind::Indent);
    /// assert_eq!(tracker.process_indentation(8, 3).unwrap().len(), 1);
    /// assert_eq!(tracker.process_indentation(0, 4).unwrap().len(), 2);
    /// assert!(tracker.process_indentation(2, 5).unwrap().len() == 1);
    /// assert!(tracker.process_indentation(1, 6).is_err());
    /// ```
    pub fn process_indentation(&mut self,
                               width: usize,
                               line: usize)
                               -> Result<Vec<Token>, LexicalError> {
        let mut tokens = Vec::new();

        if width > self.current() {
            self.indent_stack.push(width);
            tokens.push(Token::new(TokenKind::Indent, "INDENT", line, 1));
            return Ok(tokens);
        }

        while width < self.current() {
            self.indent_stack.pop();
            tokens.push(Token::new(TokenKind::Dedent, "DEDENT", line, 1));
        }

        if width != self.current() {
            return Err(LexicalError::InconsistentIndentation { width, line });
        }

        Ok(tokens)
    }

    /// Closes every open block at end of input.
    pub fn finalize(&mut self, line: usize) -> Vec<Token> {
        let mut tokens = Vec::new();

        while self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            tokens.push(Token::new(TokenKind::Dedent, "DEDENT", line, 1));
        }

        tokens
    }
}

impl Default for IndentationTracker {
    fn default() -> Self {
        Self::new()
    }
}
