use std::io::Write;

use crate::{
    ast::Expr,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl<W: Write> Evaluator<'_, W> {
    /// Evaluates a logical OR with short-circuiting.
    ///
    /// The left operand is evaluated first. If it is non-zero the result is
    /// `1` and the right operand is never evaluated, so errors it would raise
    /// do not occur. Otherwise the result is `1` if the right operand is
    /// non-zero and `0` if not.
    ///
    /// # Example
    /// ```
    /// use tinypy::run;
    ///
    /// let mut out = Vec::new();
    /// run("print(1 or (1 // 0))\n", &mut out).unwrap();
    /// assert_eq!(out, b"1\n");
    /// ```
    pub fn eval_or(&self, left: &Expr, right: &Expr) -> EvalResult<i64> {
        if self.eval(left)? != 0 {
            return Ok(1);
        }
        Ok(i64::from(self.eval(right)? != 0))
    }

    /// Evaluates a logical AND with short-circuiting.
    ///
    /// If the left operand is zero the result is `0` and the right operand is
    /// never evaluated. Otherwise the result is `1` if the right operand is
    /// non-zero and `0` if not.
    pub fn eval_and(&self, left: &Expr, right: &Expr) -> EvalResult<i64> {
        if self.eval(left)? == 0 {
            return Ok(0);
        }
        Ok(i64::from(self.eval(right)? != 0))
    }
}
