use thiserror::Error;

/// Lexing and parsing errors.
///
/// Defines every failure that can occur while turning source text into tokens
/// and tokens into nodes: unknown characters, oversized literals, missing
/// delimiters and unexpected tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while reducing nodes to values:
/// unknown names, type mismatches, division by zero and overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure that aborts a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// The user-facing category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A character no token pattern accepts.
    Lex,
    /// A grammar violation.
    Syntax,
    /// An undeclared variable or unknown function.
    Name,
    /// An arithmetic or built-in failure during evaluation.
    Eval,
}

impl Error {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use cfglang::{error::ErrorKind, get_result};
    ///
    /// let err = get_result("$[x: undeclared]").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Name);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) if e.is_lexical() => ErrorKind::Lex,
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(e) if e.is_name_error() => ErrorKind::Name,
            Self::Runtime(_) => ErrorKind::Eval,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Lex => "LexError",
            Self::Syntax => "SyntaxError",
            Self::Name => "NameError",
            Self::Eval => "EvalError",
        };
        write!(f, "{name}")
    }
}
