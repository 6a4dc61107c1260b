use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        parser::{
            core::{ParseResult, parse_expression},
            utils::{end_of_input, expect, parse_identifier, unexpected},
        },
        token::{Token, TokenKind},
    },
};

const FACTOR_START: &str = "ID, CONST, True, False or '('";

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`    (numeric negation)
/// - `not`  (logical not)
///
/// Unary operators are right-associative, so an input like `not -x` is parsed
/// as `not (-x)`, and `not not not x` nests three times.
///
/// Grammar:
/// ```text
///     unary := ("not" | "-") unary
///            | factor
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or a factor.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let (op, line) = match tokens.peek() {
        Some(token) if token.kind == TokenKind::Minus => (UnaryOperator::Negate, token.line),
        Some(token) if token.kind == TokenKind::Not => (UnaryOperator::Not, token.line),
        _ => return parse_factor(tokens),
    };

    tokens.next();
    let operand = parse_unary(tokens)?;

    Ok(Expr::Unary { op,
                     operand: Box::new(operand),
                     line })
}

/// Parses a factor, the atomic unit of an expression.
///
/// Grammar:
/// ```text
///     factor := "(" expr ")"
///             | loc
///             | CONST
///             | "True" | "False"
/// ```
/// # Errors
/// Returns a `SyntaxError` naming the accepted alternatives when the next
/// token cannot start a factor.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = *tokens.peek().ok_or_else(|| end_of_input(FACTOR_START))?;

    match token.kind {
        TokenKind::LParen => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect(tokens, TokenKind::RParen, "')'")?;
            Ok(expr)
        },
        TokenKind::Id => parse_loc(tokens),
        TokenKind::Const => {
            tokens.next();
            let value = token.lexeme
                             .parse()
                             .map_err(|_| unexpected(token, "an integer literal"))?;
            Ok(Expr::Constant { value })
        },
        TokenKind::True | TokenKind::False => {
            tokens.next();
            Ok(Expr::Constant { value: i64::from(token.kind == TokenKind::True) })
        },
        _ => Err(unexpected(token, FACTOR_START)),
    }
}

/// Parses a location: a bare variable or a list access.
///
/// An identifier followed by `[` is a list access; anything else makes it a
/// plain variable reference. No check against declared names happens here.
///
/// Grammar: `loc := ID ("[" expr "]")?`
pub(crate) fn parse_loc<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let id = parse_identifier(tokens)?;

    if let Some(token) = tokens.peek()
       && token.kind == TokenKind::LBracket
    {
        tokens.next();
        let index = parse_expression(tokens)?;
        expect(tokens, TokenKind::RBracket, "']'")?;

        return Ok(Expr::ListAccess { name:  id.lexeme.clone(),
                                     index: Box::new(index),
                                     line:  id.line, });
    }

    Ok(Expr::Variable { name: id.lexeme.clone(),
                        line: id.line, })
}
