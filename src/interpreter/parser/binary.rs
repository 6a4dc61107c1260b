use std::iter::Peekable;

use crate::{
    ast::{Expr, MathOperator, RelOperator},
    interpreter::{
        parser::{core::ParseResult, unary::parse_unary},
        token::{Token, TokenKind},
    },
};

/// Maps a token kind to its comparison operator.
///
/// Returns `None` for all other kinds.
///
/// # Example
/// ```
/// use tinypy::{
///     ast::RelOperator,
///     interpreter::{parser::binary::token_to_rel_operator, token::TokenKind},
/// };
///
/// assert_eq!(token_to_rel_operator(TokenKind::LessEqual),
///            Some(RelOperator::LessEqual));
/// assert_eq!(token_to_rel_operator(TokenKind::Plus), None);
/// ```
#[must_use]
pub const fn token_to_rel_operator(kind: TokenKind) -> Option<RelOperator> {
    match kind {
        TokenKind::Less => Some(RelOperator::Less),
        TokenKind::LessEqual => Some(RelOperator::LessEqual),
        TokenKind::Greater => Some(RelOperator::Greater),
        TokenKind::GreaterEqual => Some(RelOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(RelOperator::Equal),
        TokenKind::BangEqual => Some(RelOperator::NotEqual),
        _ => None,
    }
}

/// Maps a token kind to its arithmetic operator.
///
/// Returns `None` for all other kinds.
#[must_use]
pub const fn token_to_math_operator(kind: TokenKind) -> Option<MathOperator> {
    match kind {
        TokenKind::Plus => Some(MathOperator::Add),
        TokenKind::Minus => Some(MathOperator::Sub),
        TokenKind::Star => Some(MathOperator::Mul),
        TokenKind::SlashSlash => Some(MathOperator::IntDiv),
        _ => None,
    }
}

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `or`, the lowest precedence level.
///
/// Grammar: `expr := join ("or" join)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree using `Expr::Or` nodes.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_logical_and(tokens)?;

    while let Some(token) = tokens.peek()
          && token.kind == TokenKind::Or
    {
        tokens.next();

        let right = parse_logical_and(tokens)?;

        left = Expr::Or { left:  Box::new(left),
                          right: Box::new(right), };
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `and`.
/// Precedence is higher than OR and lower than equality.
///
/// Grammar: `join := equality ("and" equality)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree using `Expr::And` nodes.
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_equality(tokens)?;

    while let Some(token) = tokens.peek()
          && token.kind == TokenKind::And
    {
        tokens.next();

        let right = parse_equality(tokens)?;

        left = Expr::And { left:  Box::new(left),
                           right: Box::new(right), };
    }

    Ok(left)
}

/// Parses equality comparisons.
///
/// Grammar: `equality := rel (("==" | "!=") rel)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_relational(tokens)?;

    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_rel_operator(token.kind)
           && matches!(op, RelOperator::Equal | RelOperator::NotEqual)
        {
            tokens.next();
            let right = parse_relational(tokens)?;
            left = Expr::Relational { op,
                                      left: Box::new(left),
                                      right: Box::new(right) };
            continue;
        }
        break;
    }

    Ok(left)
}

/// Parses ordering comparisons.
///
/// Comparisons chain left-associatively like every other binary layer, so
/// `a < b < c` compares the `0`/`1` result of `a < b` with `c`.
///
/// Grammar: `rel := numexpr (("<" | "<=" | ">" | ">=") numexpr)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_additive(tokens)?;

    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_rel_operator(token.kind)
           && !matches!(op, RelOperator::Equal | RelOperator::NotEqual)
        {
            tokens.next();
            let right = parse_additive(tokens)?;
            left = Expr::Relational { op,
                                      left: Box::new(left),
                                      right: Box::new(right) };
            continue;
        }
        break;
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// Grammar: `numexpr := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Math` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens)?;

    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_math_operator(token.kind)
           && matches!(op, MathOperator::Add | MathOperator::Sub)
        {
            let line = token.line;
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::Math { op,
                                left: Box::new(left),
                                right: Box::new(right),
                                line };
            continue;
        }
        break;
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `//`.
///
/// Grammar: `term := unary (("*" | "//") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_unary(tokens)?;

    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_math_operator(token.kind)
           && matches!(op, MathOperator::Mul | MathOperator::IntDiv)
        {
            let line = token.line;
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::Math { op,
                                left: Box::new(left),
                                right: Box::new(right),
                                line };
            continue;
        }
        break;
    }

    Ok(left)
}
