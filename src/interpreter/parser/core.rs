use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::SyntaxError,
    interpreter::{
        parser::{
            binary::parse_logical_or,
            statement::parse_statement,
            utils::{end_of_input, peek_kind, skip_newlines},
        },
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a complete token stream into a program.
///
/// This is the parser's entry point. The stream must come from
/// [`crate::interpreter::lexer::tokenize`] or follow the same structure: a
/// sequence of statements terminated by `ENDMARKER`.
///
/// # Errors
/// Returns the first [`SyntaxError`] encountered; there is no recovery. A
/// program without statements is rejected with
/// [`SyntaxError::EmptyProgram`].
///
/// # Example
/// ```
/// use tinypy::{
///     ast::{Expr, Statement},
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let program = parse(&tokenize("print(True)\n").unwrap()).unwrap();
///
/// assert_eq!(program.statements,
///            [Statement::Print { value: Expr::Constant { value: 1 },
///                                line:  1, }]);
///
/// assert!(parse(&tokenize("\n\n").unwrap()).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let program = parse_program(&mut iter)?;

    if program.statements.is_empty() {
        return Err(SyntaxError::EmptyProgram);
    }

    Ok(program)
}

/// Parses statements until the `ENDMARKER` token.
///
/// Grammar: `program := statement* ENDMARKER`
///
/// Blank lines between statements are skipped.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token>
{
    let mut statements = Vec::new();

    loop {
        skip_newlines(tokens);

        match peek_kind(tokens) {
            Some(TokenKind::EndMarker) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(end_of_input("ENDMARKER")),
        }
    }

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_logical_or(tokens)
}
