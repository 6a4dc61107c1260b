use std::io::Write;

use crate::{
    ast::{Expr, Program, Statement},
    error::EvaluationError,
    interpreter::{
        evaluator::{binary::arithmetic::apply_math, binary::comparison::compare, unary::apply_unary},
        symbols::SymbolStore,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// How a statement finished.
///
/// `break` and `continue` do not unwind through errors; they travel back up
/// the statement call chain as a `Flow` until the innermost loop consumes
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Flow {
    /// Continue with the next statement.
    Normal,
    /// Leave the innermost enclosing loop.
    Break,
    /// Skip to the next condition check of the innermost enclosing loop.
    Continue,
}

/// Executes a program against a symbol store.
///
/// The evaluator borrows the store for the duration of a run and writes the
/// output of `print` statements to `out`, one integer per line.
///
/// ## Usage
///
/// ```
/// use tinypy::interpreter::{
///     evaluator::core::Evaluator, lexer::tokenize, parser::parse, symbols::SymbolStore,
/// };
///
/// let program = parse(&tokenize("x = 6 * 7\nprint(x)\n").unwrap()).unwrap();
///
/// let mut store = SymbolStore::new();
/// let mut out = Vec::new();
/// Evaluator::new(&mut store, &mut out).run(&program).unwrap();
///
/// assert_eq!(out, b"42\n");
/// assert_eq!(store.scalar("x", 0).unwrap(), 42);
/// ```
pub struct Evaluator<'s, W: Write> {
    /// Variables and lists of the running program.
    pub(in crate::interpreter::evaluator) symbols: &'s mut SymbolStore,
    /// Sink for `print` output.
    pub(in crate::interpreter::evaluator) out:     W,
}

impl<'s, W: Write> Evaluator<'s, W> {
    /// Creates an evaluator over `symbols` that prints to `out`.
    pub const fn new(symbols: &'s mut SymbolStore, out: W) -> Self {
        Self { symbols, out }
    }

    /// Runs every top-level statement in order.
    ///
    /// A `break` or `continue` outside any loop ends the top-level statement
    /// it occurs in; execution resumes with the next one.
    ///
    /// # Errors
    /// Returns the first [`EvaluationError`]; statements after it do not run.
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        for statement in &program.statements {
            let _ = self.exec(statement)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Executes statements in order, stopping early at `break` or `continue`.
    ///
    /// # Returns
    /// [`Flow::Normal`] if every statement completed, otherwise the signal
    /// that interrupted the sequence.
    pub fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            let flow = self.exec(statement)?;
            if flow != Flow::Normal {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a single statement.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// The [`Flow`] the statement ended with.
    pub fn exec(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Definition { name, value, .. } => {
                let value = self.eval(value)?;
                self.symbols.set_scalar(name, value);
            },
            Statement::ListInit { name, .. } => self.symbols.init_list(name),
            Statement::ListAppend { name, value, line } => {
                let value = self.eval(value)?;
                self.symbols.append(name, value, *line)?;
            },
            Statement::Print { value, .. } => {
                let value = self.eval(value)?;
                writeln!(self.out, "{value}")?;
            },
            Statement::Break { .. } => return Ok(Flow::Break),
            Statement::Continue { .. } => return Ok(Flow::Continue),
            Statement::If(conditional) => return self.exec_if(conditional),
            Statement::While { condition, body, .. } => return self.exec_while(condition, body),
        }
        Ok(Flow::Normal)
    }

    /// Evaluates an expression to an integer.
    ///
    /// Operands are evaluated left to right. `or` and `and` skip their right
    /// operand when the left one decides the result.
    ///
    /// # Errors
    /// Fails on undeclared names, scalar/list confusion, out-of-bounds list
    /// access, division by zero and overflow.
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Constant { value } => Ok(*value),
            Expr::Variable { name, line } => self.symbols.scalar(name, *line),
            Expr::ListAccess { name, index, line } => {
                let index = self.eval(index)?;
                self.symbols.list_element(name, index, *line)
            },
            Expr::Unary { op, operand, line } => apply_unary(*op, self.eval(operand)?, *line),
            Expr::Or { left, right } => self.eval_or(left, right),
            Expr::And { left, right } => self.eval_and(left, right),
            Expr::Relational { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(compare(*op, left, right))
            },
            Expr::Math { op, left, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                apply_math(*op, left, right, *line)
            },
        }
    }
}
