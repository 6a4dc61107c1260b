use crate::{ast::MathOperator, error::EvaluationError, interpreter::evaluator::core::EvalResult};

/// Evaluates an arithmetic operation on two integers.
///
/// All operations are checked. `//` truncates toward zero, so `-7 // 2` is
/// `-3`.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// [`EvaluationError::DivisionByZero`] for `x // 0`, and
/// [`EvaluationError::Overflow`] when the result does not fit in 64 bits.
///
/// # Example
/// ```
/// use tinypy::{ast::MathOperator, interpreter::evaluator::binary::arithmetic::apply_math};
///
/// assert_eq!(apply_math(MathOperator::IntDiv, 7, 2, 1).unwrap(), 3);
/// assert_eq!(apply_math(MathOperator::IntDiv, -7, 2, 1).unwrap(), -3);
/// assert!(apply_math(MathOperator::IntDiv, 1, 0, 1).is_err());
/// assert!(apply_math(MathOperator::Add, i64::MAX, 1, 1).is_err());
/// ```
pub fn apply_math(op: MathOperator, left: i64, right: i64, line: usize) -> EvalResult<i64> {
    let result = match op {
        MathOperator::Add => left.checked_add(right),
        MathOperator::Sub => left.checked_sub(right),
        MathOperator::Mul => left.checked_mul(right),
        MathOperator::IntDiv => {
            if right == 0 {
                return Err(EvaluationError::DivisionByZero { line });
            }
            left.checked_div(right)
        },
    };

    result.ok_or(EvaluationError::Overflow { line })
}
