use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        parser::{
            block::{parse_if, parse_while},
            core::{ParseResult, parse_expression},
            utils::{
                end_of_input, end_simple_statement, expect, parse_identifier, peek_kind, unexpected,
            },
        },
        token::{Token, TokenKind},
    },
};

/// Parses a single statement.
///
/// Compound statements are recognized by their leading keyword (`if`,
/// `while`) and handed to [`crate::interpreter::parser::block`]; everything
/// else is a simple statement.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    match peek_kind(tokens) {
        Some(TokenKind::If) => Ok(Statement::If(parse_if(tokens)?)),
        Some(TokenKind::While) => parse_while(tokens),
        _ => parse_simple_statement(tokens),
    }
}

/// Parses a simple (single-line) statement.
///
/// Supported forms, keyed off the leading token:
///
/// - `ID = list()`
/// - `ID = <expression>`
/// - `ID.append(<expression>)`
/// - `break`
/// - `continue`
/// - `print(<expression>)`
///
/// Each form must be followed by `NEWLINE`, `DEDENT` or `ENDMARKER`.
///
/// # Errors
/// Returns a `SyntaxError` if the leading token starts none of the forms or a
/// form is incomplete.
pub fn parse_simple_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    const EXPECTED: &str = "ID, 'if', 'while', 'break', 'continue' or 'print'";

    let token = *tokens.peek().ok_or_else(|| end_of_input(EXPECTED))?;
    let line = token.line;

    let statement = match token.kind {
        TokenKind::Id => parse_assignment_or_append(tokens)?,
        TokenKind::Break => {
            tokens.next();
            Statement::Break { line }
        },
        TokenKind::Continue => {
            tokens.next();
            Statement::Continue { line }
        },
        TokenKind::Print => {
            tokens.next();
            expect(tokens, TokenKind::LParen, "'('")?;
            let value = parse_expression(tokens)?;
            expect(tokens, TokenKind::RParen, "')'")?;
            Statement::Print { value, line }
        },
        _ => return Err(unexpected(token, EXPECTED)),
    };

    end_simple_statement(tokens)?;
    Ok(statement)
}

/// Parses the statements that start with an identifier.
///
/// Distinguishes `ID = list()`, `ID = <expression>` and
/// `ID.append(<expression>)` by the token after the identifier, and after the
/// `=` by whether the `list` keyword follows.
fn parse_assignment_or_append<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    const EXPECTED: &str = "'= <expr>', '= list()' or '.append(<expr>)'";

    let id = parse_identifier(tokens)?;
    let name = id.lexeme.clone();
    let line = id.line;

    match tokens.next() {
        Some(token) if token.kind == TokenKind::Assign => {
            if peek_kind(tokens) == Some(TokenKind::List) {
                tokens.next();
                expect(tokens, TokenKind::LParen, "'('")?;
                expect(tokens, TokenKind::RParen, "')'")?;
                return Ok(Statement::ListInit { name, line });
            }

            let value = parse_expression(tokens)?;
            Ok(Statement::Definition { name, value, line })
        },
        Some(token) if token.kind == TokenKind::Dot => {
            expect(tokens, TokenKind::Append, "'append'")?;
            expect(tokens, TokenKind::LParen, "'('")?;
            let value = parse_expression(tokens)?;
            expect(tokens, TokenKind::RParen, "')'")?;
            Ok(Statement::ListAppend { name, value, line })
        },
        Some(token) => Err(unexpected(token, EXPECTED)),
        None => Err(end_of_input(EXPECTED)),
    }
}
