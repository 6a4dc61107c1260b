/// Short-circuiting `or` and `and`.
pub mod logic;

/// Comparison operators.
pub mod comparison;

/// Checked integer arithmetic.
pub mod arithmetic;
