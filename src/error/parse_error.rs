use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that matches no token pattern.
    #[error("Error on line {line}: Unexpected character '{character}' at column {column}.")]
    UnexpectedCharacter {
        /// The offending input.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
        /// Offset from the start of the line.
        column:    usize,
    },
    /// A numeric literal outside the representable range.
    #[error("Error on line {line}: Numeric literal {literal} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Found a token that cannot start a statement.
    #[error("Error on line {line}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: &'static str,
    },
    /// `var` was not followed by a name.
    #[error("Error on line {line}: Expected a variable name after 'var'.")]
    ExpectedVariableName {
        /// The source line of the `var` keyword.
        line: usize,
    },
    /// A `?{` expression was not closed by `}`.
    #[error("Error on line {line}: Expected closing brace '}}' for constant expression.")]
    ExpectedClosingBrace {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A dictionary entry did not start with an identifier.
    #[error("Error on line {line}: Expected a dictionary key.")]
    ExpectedDictionaryKey {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A dictionary key was not followed by `:`.
    #[error("Error on line {line}: Expected ':' after dictionary key '{key}'.")]
    ExpectedColon {
        /// The key just read.
        key:  String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Neither a comma nor the closing delimiter followed a list item.
    #[error("Error on line {line}: Expected ',' or '{closing}', found '{found}'.")]
    ExpectedSeparator {
        /// The delimiter that would close the list.
        closing: String,
        /// The token actually found.
        found:   String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The input ended inside a dictionary.
    #[error("Error on line {line}: Dictionary opened here is never closed with ']'.")]
    UnclosedDictionary {
        /// The source line of the `$[`.
        line: usize,
    },
    /// The input ended inside an argument list.
    #[error("Error on line {line}: Arguments of '{name}' are never closed with ')'.")]
    UnclosedArguments {
        /// The called function.
        name: String,
        /// The source line of the call.
        line: usize,
    },
    /// A token that cannot begin a value.
    #[error("Error on line {line}: Invalid value '{token}'.")]
    InvalidValue {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A token that cannot begin an expression term.
    #[error("Error on line {line}: Invalid term '{token}' in expression.")]
    InvalidTerm {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Whether the error was raised by the lexer rather than the parser.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self,
                 Self::UnexpectedCharacter { .. } | Self::LiteralTooLarge { .. })
    }
}
