use logos::Logos;

use crate::{ast::BinaryOperator, error::ParseError};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Keywords are declared as exact tokens so they take priority over the
/// identifier pattern when the whole word matches.
///
/// Whitespace, line breaks and `*>` comments are skipped by the lexer and
/// never become tokens.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"\*>[^\n]*")]
#[logos(error = LexingError)]
pub enum Token {
    /// `var`
    #[token("var")]
    Var,
    /// `?{`
    #[token("?{")]
    ConstOpen,
    /// `}`
    #[token("}")]
    ConstClose,
    /// `$[`
    #[token("$[")]
    DictOpen,
    /// `]`
    #[token("]")]
    DictClose,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// Single-quoted string literals such as `'hello'`. The quotes are
    /// stripped; the contents are kept verbatim.
    #[regex(r"'[^']*'", parse_string)]
    Str(String),
    /// Numeric literal with a fractional part, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// Identifier tokens; variable, key or function names such as `port`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// One of `+`, `-`, `*`, `/`.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    Operator(BinaryOperator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Var => write!(f, "var"),
            Self::ConstOpen => write!(f, "?{{"),
            Self::ConstClose => write!(f, "}}"),
            Self::DictOpen => write!(f, "$["),
            Self::DictClose => write!(f, "]"),
            Self::Colon => write!(f, ":"),
            Self::Comma => write!(f, ","),
            Self::Str(s) => write!(f, "'{s}'"),
            Self::Float(r) => write!(f, "{r:?}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Turns byte offsets into line and column numbers.
///
/// Offsets must be fed in increasing order; only the text between the last
/// offset and the new one is scanned for line breaks.
#[derive(Debug, Clone, Copy)]
struct LineTracker {
    line:       usize,
    line_start: usize,
    scanned:    usize,
}

impl LineTracker {
    const fn new() -> Self {
        Self { line:       1,
               line_start: 0,
               scanned:    0, }
    }

    fn position(&mut self, source: &str, offset: usize) -> Position {
        for (i, byte) in source.as_bytes()[self.scanned..offset].iter().enumerate() {
            if *byte == b'\n' {
                self.line += 1;
                self.line_start = self.scanned + i + 1;
            }
        }
        self.scanned = offset;

        Position { line:   self.line,
                   column: offset - self.line_start, }
    }
}

/// Source position of a token. Lines start at 1, columns at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line:   usize,
    pub column: usize,
}

/// Failure reported by a token callback.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexingError {
    /// Nothing in the grammar matches the input.
    #[default]
    UnexpectedCharacter,
    /// A numeral does not fit into an `i64` or a finite `f64`.
    LiteralOverflow,
}

/// Converts the whole input into `(Token, Position)` pairs.
///
/// Comments, whitespace and newlines are dropped here; only grammar tokens
/// reach the parser.
///
/// # Errors
/// Returns `ParseError::UnexpectedCharacter` for input no pattern accepts and
/// `ParseError::LiteralTooLarge` for numerals outside the `i64` or finite
/// `f64` range.
///
/// # Example
/// ```
/// use cfglang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("var port 8080").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(tok, _)| tok).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Var, Token::Identifier("port".into()), Token::Integer(8080)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Position)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lines = LineTracker::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lines.position(source, lexer.span().start);
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(LexingError::LiteralOverflow) => {
                return Err(ParseError::LiteralTooLarge { literal: lexer.slice().to_string(),
                                                         line:    position.line, });
            },
            Err(LexingError::UnexpectedCharacter) => {
                return Err(ParseError::UnexpectedCharacter { character: lexer.slice()
                                                                             .to_string(),
                                                             line:      position.line,
                                                             column:    position.column, });
            },
        }
    }

    log::trace!("tokenized {} tokens over {} lines",
                tokens.len(),
                lines.position(source, source.len()).line);
    Ok(tokens)
}

/// Strips the surrounding single quotes from a string literal.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Parses a floating-point literal from the current token slice.
///
/// # Errors
/// `LexingError::LiteralOverflow` when the literal rounds to infinity.
fn parse_float(lex: &logos::Lexer<Token>) -> Result<f64, LexingError> {
    lex.slice()
       .parse::<f64>()
       .ok()
       .filter(|r| r.is_finite())
       .ok_or(LexingError::LiteralOverflow)
}

/// Parses an integer literal from the current token slice.
///
/// # Errors
/// `LexingError::LiteralOverflow` when the literal exceeds `i64::MAX`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexingError> {
    lex.slice()
       .parse()
       .map_err(|_| LexingError::LiteralOverflow)
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
