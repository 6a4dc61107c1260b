use std::io::Write;

use crate::{
    ast::{Expr, IfStatement, Statement},
    interpreter::evaluator::core::{EvalResult, Evaluator, Flow},
};

impl<W: Write> Evaluator<'_, W> {
    /// Executes an `if` statement.
    ///
    /// A non-zero condition runs the `if` block. Otherwise the chained `elif`
    /// is tried as a fresh conditional, and only when there is none does the
    /// `else` block run. At most one block executes.
    ///
    /// # Returns
    /// The [`Flow`] of the executed block, so a `break` or `continue` inside
    /// it reaches the enclosing loop.
    pub fn exec_if(&mut self, conditional: &IfStatement) -> EvalResult<Flow> {
        if self.eval(&conditional.condition)? != 0 {
            return self.exec_block(&conditional.body);
        }

        match &conditional.elif {
            Some(elif) => self.exec_if(elif),
            None => self.exec_block(&conditional.else_body),
        }
    }

    /// Executes a `while` loop.
    ///
    /// The condition is evaluated before every iteration. A `break` in the
    /// body leaves the loop at once, skipping the condition check; a
    /// `continue` abandons the rest of the body and goes back to the
    /// condition. Neither signal travels past this loop.
    ///
    /// # Example
    /// ```
    /// use tinypy::run;
    ///
    /// let source = "i = 0\nwhile True:\n    i = i + 1\n    if i == 3:\n        break\nprint(i)\n";
    /// let mut out = Vec::new();
    /// run(source, &mut out).unwrap();
    ///
    /// assert_eq!(out, b"3\n");
    /// ```
    pub fn exec_while(&mut self, condition: &Expr, body: &[Statement]) -> EvalResult<Flow> {
        while self.eval(condition)? != 0 {
            if self.exec_block(body)? == Flow::Break {
                break;
            }
        }
        Ok(Flow::Normal)
    }
}
