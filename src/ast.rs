use std::fmt;

/// Number of spaces per nesting level used when rendering blocks.
const INDENT_WIDTH: usize = 4;

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical negation, `not x`. Yields `1` for `0` and `0` otherwise.
    Not,
    /// Arithmetic negation, `-x`.
    Negate,
}

/// A comparison operator. Comparisons yield `1` or `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOperator {
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

/// An arithmetic operator over 64-bit signed integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `//`, integer division truncating toward zero.
    IntDiv,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => f.write_str("not "),
            Self::Negate => f.write_str("-"),
        }
    }
}

impl fmt::Display for RelOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Less => "<",
                        Self::LessEqual => "<=",
                        Self::Greater => ">",
                        Self::GreaterEqual => ">=",
                        Self::Equal => "==",
                        Self::NotEqual => "!=",
                    })
    }
}

impl fmt::Display for MathOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Add => "+",
                        Self::Sub => "-",
                        Self::Mul => "*",
                        Self::IntDiv => "//",
                    })
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every expression evaluates to a single 64-bit integer; booleans are
/// represented as `0` and `1`. Expressions never modify the symbol store.
/// Nodes that can fail at run time carry the source line of their leading
/// token for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a scalar variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An integer constant. `True` and `False` are stored as `1` and `0`.
    Constant {
        /// The constant value.
        value: i64,
    },
    /// Element access into a list, `name[index]`.
    ListAccess {
        /// Name of the list.
        name:  String,
        /// The index expression.
        index: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operation.
    Unary {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// Short-circuiting logical disjunction.
    Or {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// Right operand, evaluated only if the left one is zero.
        right: Box<Self>,
    },
    /// Short-circuiting logical conjunction.
    And {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// Right operand, evaluated only if the left one is non-zero.
        right: Box<Self>,
    },
    /// A comparison.
    Relational {
        /// The comparison operator.
        op:    RelOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// An arithmetic operation.
    Math {
        /// The arithmetic operator.
        op:    MathOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator in the source code.
        line:  usize,
    },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable { name, .. } => f.write_str(name),
            Self::Constant { value } => write!(f, "{value}"),
            Self::ListAccess { name, index, .. } => write!(f, "{name}[{index}]"),
            Self::Unary { op, operand, .. } => write!(f, "{op}{operand}"),
            Self::Or { left, right } => write!(f, "({left} or {right})"),
            Self::And { left, right } => write!(f, "({left} and {right})"),
            Self::Relational { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Math { op, left, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// A conditional statement with its optional `elif` chain.
///
/// When `elif` is present the `else_body` is empty: the grammar accepts either
/// a chained `elif` or an `else` block after the `if` block, and a trailing
/// `else` of the whole chain belongs to the innermost nested conditional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStatement {
    /// The condition; any non-zero value selects `body`.
    pub condition: Expr,
    /// Statements run when the condition holds.
    pub body:      Vec<Statement>,
    /// Statements run when the condition fails and there is no `elif`.
    pub else_body: Vec<Statement>,
    /// The chained `elif`, tried when the condition fails.
    pub elif:      Option<Box<IfStatement>>,
    /// Line number of the `if` or `elif` keyword.
    pub line:      usize,
}

impl IfStatement {
    fn fmt_chain(&self, f: &mut fmt::Formatter<'_>, depth: usize, keyword: &str) -> fmt::Result {
        pad(f, depth)?;
        writeln!(f, "{keyword} {}:", self.condition)?;
        fmt_block(f, &self.body, depth + 1)?;

        if let Some(elif) = &self.elif {
            elif.fmt_chain(f, depth, "elif")
        } else if self.else_body.is_empty() {
            Ok(())
        } else {
            pad(f, depth)?;
            writeln!(f, "else:")?;
            fmt_block(f, &self.else_body, depth + 1)
        }
    }
}

/// An abstract syntax tree (AST) node representing a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Scalar assignment, `name = value`.
    Definition {
        /// Name of the variable being assigned.
        name:  String,
        /// The assigned expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// List creation, `name = list()`.
    ListInit {
        /// Name of the list.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// List append, `name.append(value)`.
    ListAppend {
        /// Name of the list.
        name:  String,
        /// The appended expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// Output statement, `print(value)`.
    Print {
        /// The printed expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// Leaves the innermost enclosing loop.
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// Skips to the next condition check of the innermost enclosing loop.
    Continue {
        /// Line number in the source code.
        line: usize,
    },
    /// `if`/`elif`/`else` conditional.
    If(IfStatement),
    /// `while` loop.
    While {
        /// The loop condition, re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Statement {
    /// Returns the source line of the statement's leading token.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Definition { line, .. }
            | Self::ListInit { line, .. }
            | Self::ListAppend { line, .. }
            | Self::Print { line, .. }
            | Self::Break { line }
            | Self::Continue { line }
            | Self::If(IfStatement { line, .. })
            | Self::While { line, .. } => *line,
        }
    }

    fn fmt_at(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            Self::If(stmt) => return stmt.fmt_chain(f, depth, "if"),
            Self::While { condition, body, .. } => {
                pad(f, depth)?;
                writeln!(f, "while {condition}:")?;
                return fmt_block(f, body, depth + 1);
            },
            _ => pad(f, depth)?,
        }

        match self {
            Self::Definition { name, value, .. } => writeln!(f, "{name} = {value}"),
            Self::ListInit { name, .. } => writeln!(f, "{name} = list()"),
            Self::ListAppend { name, value, .. } => writeln!(f, "{name}.append({value})"),
            Self::Print { value, .. } => writeln!(f, "print({value})"),
            Self::Break { .. } => writeln!(f, "break"),
            Self::Continue { .. } => writeln!(f, "continue"),
            Self::If(_) | Self::While { .. } => Ok(()),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, 0)
    }
}

/// The root of the syntax tree: an ordered, non-empty list of statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// Renders the program back to source form.
///
/// Blocks are indented by four spaces per level and every binary expression
/// is fully parenthesised, so the output parses back to an equivalent tree.
///
/// # Example
/// ```
/// use tinypy::interpreter::{lexer::tokenize, parser::parse};
///
/// let source = "x = 1 + 2 * 3\nif x > 5:\n  print(x)\nelse:\n  print(0)\n";
/// let program = parse(&tokenize(source).unwrap()).unwrap();
///
/// assert_eq!(program.to_string(),
///            "x = (1 + (2 * 3))\nif (x > 5):\n    print(x)\nelse:\n    print(0)\n");
/// ```
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_block(f, &self.statements, 0)
    }
}

fn fmt_block(f: &mut fmt::Formatter<'_>, statements: &[Statement], depth: usize) -> fmt::Result {
    statements.iter().try_for_each(|statement| statement.fmt_at(f, depth))
}

fn pad(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    write!(f, "{:width$}", "", width = depth * INDENT_WIDTH)
}
