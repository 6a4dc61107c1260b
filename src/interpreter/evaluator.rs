/// Core evaluation logic and the evaluator state.
///
/// Contains the [`core::Evaluator`] that walks the syntax tree, the
/// [`core::Flow`] signal used for `break`/`continue`, and statement dispatch.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the short-circuiting logical operators, comparisons and checked
/// integer arithmetic.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Evaluation of conditionals and loops.
///
/// Runs `if`/`elif`/`else` chains and `while` loops, consuming `break` and
/// `continue` signals at the loop boundary.
pub mod control;
