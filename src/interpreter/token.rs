use std::fmt;

/// The tag of a token.
///
/// Covers punctuation, operators, keywords, literals and the structural
/// markers synthesized by the lexer from line breaks and indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `//`
    SlashSlash,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// `if`
    If,
    /// `elif`
    Elif,
    /// `else`
    Else,
    /// `while`
    While,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `list`
    List,
    /// `append`
    Append,
    /// `print`
    Print,
    /// `True`
    True,
    /// `False`
    False,
    /// Identifier, such as `x` or `total2`.
    Id,
    /// Integer literal, such as `42`.
    Const,
    /// End of a physical line.
    Newline,
    /// Start of a more deeply indented block.
    Indent,
    /// End of an indented block.
    Dedent,
    /// End of input.
    EndMarker,
}

impl TokenKind {
    /// Classifies an identifier-shaped word, returning its keyword tag or
    /// [`TokenKind::Id`] when the word is not reserved.
    ///
    /// # Example
    /// ```
    /// use tinypy::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::keyword_or_id("elif"), TokenKind::Elif);
    /// assert_eq!(TokenKind::keyword_or_id("True"), TokenKind::True);
    /// assert_eq!(TokenKind::keyword_or_id("true"), TokenKind::Id);
    /// ```
    #[must_use]
    pub fn keyword_or_id(word: &str) -> Self {
        match word {
            "if" => Self::If,
            "elif" => Self::Elif,
            "else" => Self::Else,
            "while" => Self::While,
            "break" => Self::Break,
            "continue" => Self::Continue,
            "list" => Self::List,
            "append" => Self::Append,
            "print" => Self::Print,
            "True" => Self::True,
            "False" => Self::False,
            "and" => Self::And,
            "or" => Self::Or,
            "not" => Self::Not,
            _ => Self::Id,
        }
    }

    /// Returns `true` for the tokens that may end a simple statement.
    #[must_use]
    pub const fn ends_simple_statement(self) -> bool {
        matches!(self, Self::Newline | Self::Dedent | Self::EndMarker)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Colon => "':'",
            Self::Comma => "','",
            Self::Dot => "'.'",
            Self::Assign => "'='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::SlashSlash => "'//'",
            Self::Less => "'<'",
            Self::LessEqual => "'<='",
            Self::Greater => "'>'",
            Self::GreaterEqual => "'>='",
            Self::EqualEqual => "'=='",
            Self::BangEqual => "'!='",
            Self::And => "'and'",
            Self::Or => "'or'",
            Self::Not => "'not'",
            Self::If => "'if'",
            Self::Elif => "'elif'",
            Self::Else => "'else'",
            Self::While => "'while'",
            Self::Break => "'break'",
            Self::Continue => "'continue'",
            Self::List => "'list'",
            Self::Append => "'append'",
            Self::Print => "'print'",
            Self::True => "'True'",
            Self::False => "'False'",
            Self::Id => "ID",
            Self::Const => "CONST",
            Self::Newline => "NEWLINE",
            Self::Indent => "INDENT",
            Self::Dedent => "DEDENT",
            Self::EndMarker => "ENDMARKER",
        };
        f.write_str(text)
    }
}

/// A single token produced by the lexer.
///
/// Tokens are created once during tokenization and never mutated. Structural
/// tokens carry a symbolic lexeme (`INDENT`, `DEDENT`, `ENDMARKER`, `\n`)
/// since they have no source text of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The source text of the token.
    pub lexeme: String,
    /// 1-based source line.
    pub line:   usize,
    /// 1-based source column of the token's first character.
    pub column: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line,
               column }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Id | TokenKind::Const => write!(f,
                                                       "<{}, {}> (line {}, column {})",
                                                       self.kind, self.lexeme, self.line, self.column),
            _ => write!(f, "{} (line {}, column {})", self.kind, self.line, self.column),
        }
    }
}
