use crate::ast::RelOperator;

/// Compares two integers, yielding `1` if the relation holds and `0` if not.
///
/// # Example
/// ```
/// use tinypy::{ast::RelOperator, interpreter::evaluator::binary::comparison::compare};
///
/// assert_eq!(compare(RelOperator::LessEqual, 2, 2), 1);
/// assert_eq!(compare(RelOperator::NotEqual, 2, 2), 0);
/// ```
#[must_use]
pub fn compare(op: RelOperator, left: i64, right: i64) -> i64 {
    let holds = match op {
        RelOperator::Less => left < right,
        RelOperator::LessEqual => left <= right,
        RelOperator::Greater => left > right,
        RelOperator::GreaterEqual => left >= right,
        RelOperator::Equal => left == right,
        RelOperator::NotEqual => left != right,
    };
    i64::from(holds)
}
