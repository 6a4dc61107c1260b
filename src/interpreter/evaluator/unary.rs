use crate::{ast::UnaryOperator, error::EvaluationError, interpreter::evaluator::core::EvalResult};

/// Evaluates a unary operation on an integer.
///
/// Supported operators:
/// - `Negate`: arithmetic negation, checked for overflow.
/// - `Not`: `1` if the operand is `0`, otherwise `0`.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `value`: Input value.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use tinypy::{ast::UnaryOperator, interpreter::evaluator::unary::apply_unary};
///
/// assert_eq!(apply_unary(UnaryOperator::Negate, 5, 1).unwrap(), -5);
/// assert_eq!(apply_unary(UnaryOperator::Not, 0, 1).unwrap(), 1);
/// assert_eq!(apply_unary(UnaryOperator::Not, -3, 1).unwrap(), 0);
/// assert!(apply_unary(UnaryOperator::Negate, i64::MIN, 1).is_err());
/// ```
pub fn apply_unary(op: UnaryOperator, value: i64, line: usize) -> EvalResult<i64> {
    match op {
        UnaryOperator::Negate => value.checked_neg()
                                      .ok_or(EvaluationError::Overflow { line }),
        UnaryOperator::Not => Ok(i64::from(value == 0)),
    }
}
