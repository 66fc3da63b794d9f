use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to use an undeclared variable.
    #[error("Error on line {line}: Undeclared variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an unknown function.
    #[error("Error on line {line}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Operand types an operator cannot combine.
    #[error("Error on line {line}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric value was expected, but not found.
    #[error("Error on line {line}: Expected number, found {found}.")]
    ExpectedNumber {
        /// Type name of the value found instead.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The wrong number of arguments was supplied to a built-in.
    #[error("Error on line {line}: '{name}' takes {expected} arguments but {found} were given.")]
    ArgumentCountMismatch {
        /// The function called.
        name:     String,
        /// Accepted argument count.
        expected: usize,
        /// Supplied argument count.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic left the representable range.
    #[error("Error on line {line}: Numeric overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A math function was called outside its domain.
    #[error("Error on line {line}: Math domain error: {details}.")]
    DomainError {
        /// Details about the rejected input.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// `print` could not write to the diagnostic channel.
    #[error("Error on line {line}: Failed to write diagnostics: {details}.")]
    DiagnosticsUnavailable {
        /// The underlying I/O failure.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Whether the error is about an unresolved name.
    #[must_use]
    pub const fn is_name_error(&self) -> bool {
        matches!(self,
                 Self::UnknownVariable { .. } | Self::UnknownFunction { .. })
    }
}
