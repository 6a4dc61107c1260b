use std::iter::Peekable;

use crate::{
    ast::{IfStatement, Statement},
    interpreter::{
        parser::{
            core::{ParseResult, parse_expression},
            statement::parse_statement,
            utils::{end_of_input, expect, peek_kind, skip_newlines, unexpected},
        },
        token::{Token, TokenKind},
    },
};

/// Parses the block owned by a compound statement, starting at its colon.
///
/// Every block follows the same template; each structural token is required
/// and consumed explicitly. Blank lines inside the block, including those
/// between the header and its first statement, are skipped.
///
/// Grammar: `block := ":" NEWLINE INDENT statement+ DEDENT`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `:` after a condition or
///   `else`.
///
/// # Returns
/// The statements of the block in source order.
///
/// # Errors
/// Returns a `SyntaxError` if a structural token is missing or the block holds
/// no statement.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Colon, "':'")?;
    expect(tokens, TokenKind::Newline, "NEWLINE")?;
    skip_newlines(tokens);
    expect(tokens, TokenKind::Indent, "INDENT")?;

    let mut statements = Vec::new();

    loop {
        skip_newlines(tokens);

        match tokens.peek() {
            Some(token) if token.kind == TokenKind::Dedent => {
                if statements.is_empty() {
                    return Err(unexpected(token, "an indented statement"));
                }
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(end_of_input("DEDENT")),
        }
    }

    Ok(statements)
}

/// Parses an `if` statement with optional `elif` chain or `else` block.
///
/// Syntax:
/// ```text
///     if <condition>:
///         <statements>
///     elif <condition>:
///         <statements>
///     else:
///         <statements>
/// ```
/// `elif` is parsed by calling this function again on the `elif` keyword,
/// so the nested conditional carries any further `elif` and the final
/// `else`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `if` or `elif` keyword.
///
/// # Returns
/// The parsed [`IfStatement`].
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<IfStatement>
    where I: Iterator<Item = &'a Token>
{
    let keyword = match tokens.next() {
        Some(token) if matches!(token.kind, TokenKind::If | TokenKind::Elif) => token,
        Some(token) => return Err(unexpected(token, "'if' or 'elif'")),
        None => return Err(end_of_input("'if' or 'elif'")),
    };

    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens)?;

    let mut statement = IfStatement { condition,
                                      body,
                                      else_body: Vec::new(),
                                      elif: None,
                                      line: keyword.line };

    match peek_kind(tokens) {
        Some(TokenKind::Elif) => statement.elif = Some(Box::new(parse_if(tokens)?)),
        Some(TokenKind::Else) => {
            tokens.next();
            statement.else_body = parse_block(tokens)?;
        },
        _ => {},
    }

    Ok(statement)
}

/// Parses a `while` loop.
///
/// Grammar: `while_stmt := "while" expr ":" NEWLINE INDENT statement+ DEDENT`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `while` keyword.
pub fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let keyword = expect(tokens, TokenKind::While, "'while'")?;
    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::While { condition,
                          body,
                          line: keyword.line })
}
