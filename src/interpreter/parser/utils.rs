use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{
        parser::core::ParseResult,
        token::{Token, TokenKind},
    },
};

/// Builds the error for a token the grammar does not accept here.
pub(in crate::interpreter::parser) fn unexpected(found: &Token, expected: &str) -> SyntaxError {
    SyntaxError::UnexpectedToken { found:    found.to_string(),
                                   expected: expected.to_string(),
                                   line:     found.line,
                                   column:   found.column, }
}

/// Builds the error for a token stream that ran out.
pub(in crate::interpreter::parser) fn end_of_input(expected: &str) -> SyntaxError {
    SyntaxError::UnexpectedEndOfInput { expected: expected.to_string() }
}

/// Returns the kind of the next token without consuming it.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>)
                                                       -> Option<TokenKind>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map(|token| token.kind)
}

/// Consumes the next token, which must be of the given kind.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `kind`: The required token kind.
/// - `expected`: Description used in the error message.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns a `SyntaxError` if the next token has another kind or the stream is
/// exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    expected: &str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == kind => Ok(token),
        Some(token) => Err(unexpected(token, expected)),
        None => Err(end_of_input(expected)),
    }
}

/// Consumes a plain identifier token.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Id, "ID")
}

/// Skips blank lines, i.e. stray `NEWLINE` tokens.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while peek_kind(tokens) == Some(TokenKind::Newline) {
        tokens.next();
    }
}

/// Terminates a simple statement.
///
/// A simple statement ends at `NEWLINE`, `DEDENT` or `ENDMARKER`. Only the
/// `NEWLINE` is consumed; the other two belong to the enclosing block or
/// program.
///
/// # Errors
/// Returns a `SyntaxError` if any other token follows the statement.
pub(in crate::interpreter::parser) fn end_simple_statement<'a, I>(tokens: &mut Peekable<I>)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    const EXPECTED: &str = "NEWLINE, DEDENT or ENDMARKER";

    match tokens.peek() {
        Some(token) if token.kind == TokenKind::Newline => {
            tokens.next();
            Ok(())
        },
        Some(token) if token.kind.ends_simple_statement() => Ok(()),
        Some(token) => Err(unexpected(token, EXPECTED)),
        None => Err(end_of_input(EXPECTED)),
    }
}
