/// Program-level parsing and the expression entry point.
///
/// Declares the parser result type and drives parsing of a whole token
/// stream into a [`crate::ast::Program`].
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles `not` and unary `-`, and the factors they apply to: literals,
/// parenthesised expressions, variables and list accesses.
pub mod unary;

/// Binary operator parsing.
///
/// One function per precedence layer, from logical OR down to
/// multiplication, each folding a left-associative chain.
pub mod binary;

/// Compound statement parsing.
///
/// Parses `if`/`elif`/`else` and `while` together with the indented blocks
/// they own.
pub mod block;

/// Simple statement parsing.
///
/// Parses assignments, list operations, `print`, `break` and `continue`, and
/// dispatches compound statements to [`block`].
pub mod statement;

/// Shared helpers for consuming expected tokens and building errors.
pub mod utils;

pub use self::core::parse;
