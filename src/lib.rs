//! # tinypy
//!
//! tinypy is a tree-walking interpreter for a small indentation-delimited
//! imperative language written in Rust.
//! It supports integer arithmetic, boolean logic, `if`/`elif`/`else`,
//! `while` loops with `break` and `continue`, scalar variables, growable
//! integer lists and `print`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::interpreter::{
    evaluator::core::Evaluator, lexer::tokenize, parser::parse, symbols::SymbolStore,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source lines to nodes that can fail at run time.
/// - Renders trees back to source form for debugging.
pub mod ast;
/// Provides error types for lexing, parsing and evaluation.
///
/// Each pipeline stage has its own error enum; [`error::Error`] wraps all of
/// them for callers that run the whole pipeline.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the token model, lexing, parsing, the symbol
/// store and evaluation.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for each pipeline stage.
pub mod interpreter;

pub use crate::error::Error;

/// Runs a program from source text.
///
/// The source is tokenized, parsed and evaluated against a fresh, empty
/// symbol store. The output of every `print` statement is written to `out`.
/// Running the same source twice produces the same output both times.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails. Output written
/// before an evaluation error stays in `out`.
///
/// # Examples
/// ```
/// use tinypy::run;
///
/// let mut out = Vec::new();
/// run("a = list()\na.append(5)\nprint(a[0])\n", &mut out).unwrap();
/// assert_eq!(out, b"5\n");
///
/// // 'x' is never defined.
/// let mut out = Vec::new();
/// assert!(run("print(x)\n", &mut out).is_err());
/// assert!(out.is_empty());
/// ```
pub fn run(source: &str, out: impl Write) -> Result<(), Error> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;

    let mut symbols = SymbolStore::new();
    Evaluator::new(&mut symbols, out).run(&program)?;

    Ok(())
}
