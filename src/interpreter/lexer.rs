use logos::Logos;

use crate::{
    error::LexicalError,
    interpreter::token::{Token, TokenKind},
};

/// Indentation tracking.
///
/// Turns the leading-whitespace width of each logical line into `INDENT` and
/// `DEDENT` tokens using a stack of open block widths.
pub mod indentation;

use indentation::IndentationTracker;

/// Raw tokens recognized inside a single physical line.
///
/// This enum only covers tokens that correspond to source text. Line breaks
/// and indentation are handled by [`tokenize`], which wraps the raw scanner
/// with the structural markers the parser needs.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r;]+")]
enum RawToken {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Const(i64),
    /// Identifier-shaped words. Keywords are classified afterwards.
    #[regex(r"[A-Za-z][A-Za-z0-9]*")]
    Word,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `//`
    #[token("//")]
    SlashSlash,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `!=`
    #[token("!=")]
    BangEqual,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the literal is too large, which makes logos report an error.
fn parse_integer(lex: &logos::Lexer<RawToken>) -> Option<i64> {
    lex.slice().parse().ok()
}

impl RawToken {
    const fn kind(&self) -> TokenKind {
        match self {
            Self::Const(_) => TokenKind::Const,
            Self::Word => TokenKind::Id,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::LBracket => TokenKind::LBracket,
            Self::RBracket => TokenKind::RBracket,
            Self::Colon => TokenKind::Colon,
            Self::Comma => TokenKind::Comma,
            Self::Dot => TokenKind::Dot,
            Self::EqualEqual => TokenKind::EqualEqual,
            Self::Assign => TokenKind::Assign,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::SlashSlash => TokenKind::SlashSlash,
            Self::LessEqual => TokenKind::LessEqual,
            Self::Less => TokenKind::Less,
            Self::GreaterEqual => TokenKind::GreaterEqual,
            Self::Greater => TokenKind::Greater,
            Self::BangEqual => TokenKind::BangEqual,
        }
    }
}

/// Converts source text into a token sequence.
///
/// Every physical line break produces a `NEWLINE` token. Before the first
/// token of each non-blank line, the width of its leading whitespace (space
/// = 1, tab = 4) is compared against the indentation stack to emit `INDENT`
/// or `DEDENT` tokens. Lines holding only whitespace or `;` are blank and do
/// not affect indentation. At end of input every open block is closed with a
/// `DEDENT` and a single `ENDMARKER` is appended.
///
/// # Errors
/// Returns a [`LexicalError`] on a stray character, a `!` or `/` not forming
/// `!=` or `//`, an integer literal that does not fit in 64 bits, or a
/// dedent to a width that matches no enclosing block.
///
/// # Example
/// ```
/// use tinypy::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let tokens = tokenize("while x:\n    x = x - 1\n").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::While,
///             TokenKind::Id,
///             TokenKind::Colon,
///             TokenKind::Newline,
///             TokenKind::Indent,
///             TokenKind::Id,
///             TokenKind::Assign,
///             TokenKind::Id,
///             TokenKind::Minus,
///             TokenKind::Const,
///             TokenKind::Newline,
///             TokenKind::Dedent,
///             TokenKind::EndMarker]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    let mut tokens = Vec::new();
    let mut indentation = IndentationTracker::new();
    let mut lines = source.split('\n').enumerate().peekable();
    let mut last_line = 1;

    while let Some((index, text)) = lines.next() {
        let line = index + 1;
        last_line = line;

        if !is_blank(text) {
            tokens.extend(indentation.process_indentation(indentation_width(text), line)?);
            tokenize_line(text, line, &mut tokens)?;
        }

        if lines.peek().is_some() {
            tokens.push(Token::new(TokenKind::Newline, "\\n", line, text.len() + 1));
        }
    }

    tokens.extend(indentation.finalize(last_line));
    tokens.push(Token::new(TokenKind::EndMarker, "ENDMARKER", last_line, 1));

    Ok(tokens)
}

/// Scans the raw tokens of one physical line and appends them to `tokens`.
fn tokenize_line(text: &str, line: usize, tokens: &mut Vec<Token>) -> Result<(), LexicalError> {
    let mut lexer = RawToken::lexer(text);

    while let Some(raw) = lexer.next() {
        let slice = lexer.slice();
        let column = lexer.span().start + 1;

        match raw {
            Ok(RawToken::Word) => {
                tokens.push(Token::new(TokenKind::keyword_or_id(slice), slice, line, column));
            },
            Ok(raw) => tokens.push(Token::new(raw.kind(), slice, line, column)),
            Err(()) => return Err(classify_error(slice, line)),
        }
    }

    Ok(())
}

/// Builds the error for a slice the raw scanner rejected.
fn classify_error(slice: &str, line: usize) -> LexicalError {
    match slice.chars().next() {
        Some(c) if c.is_ascii_digit() => LexicalError::LiteralTooLarge { literal: slice.to_string(),
                                                                         line },
        Some(character @ ('!' | '/')) => LexicalError::UnexpectedCharacter { character, line },
        Some(character) => LexicalError::StrayCharacter { character, line },
        None => LexicalError::StrayCharacter { character: '\0',
                                               line },
    }
}

/// Returns `true` if the line holds nothing but whitespace and semicolons.
fn is_blank(text: &str) -> bool {
    text.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | ';'))
}

/// Width of the leading whitespace run: a space counts 1, a tab counts 4.
fn indentation_width(text: &str) -> usize {
    text.chars()
        .map_while(|c| match c {
            ' ' => Some(1),
            '\t' => Some(4),
            _ => None,
        })
        .sum()
}
