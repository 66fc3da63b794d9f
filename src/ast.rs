use crate::interpreter::value::core::Value;

/// A node produced by the parser.
///
/// Some nodes are already reduced to a [`Node::Literal`] when they are built
/// (numbers, strings, booleans and constant expressions in value position).
/// Variable references, function calls and dictionaries stay unresolved until
/// the evaluator reduces them.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A concrete value.
    Literal {
        /// The constant value.
        value: Value,
        /// Line number in the source code.
        line:  usize,
    },
    /// Deferred reference to a declared variable.
    VariableRef {
        /// Name of the variable.
        name:      String,
        /// Ordinal of the top-level statement the reference appears in.
        statement: usize,
        /// Line number in the source code.
        line:      usize,
    },
    /// Call to a built-in function. Arguments are reduced only when the call
    /// itself is.
    FunctionCall {
        name:      String,
        arguments: Vec<Self>,
        line:      usize,
    },
    /// Arithmetic on two operands.
    BinaryOp {
        left:  Box<Self>,
        op:    BinaryOperator,
        right: Box<Self>,
        line:  usize,
    },
    /// `$[ key: value, ... ]` in source order. Keys may repeat.
    Dictionary {
        entries: Vec<(String, Self)>,
        line:    usize,
    },
}

impl Node {
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::VariableRef { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Dictionary { line, .. } => *line,
        }
    }

    /// Wraps a value into a literal node.
    #[must_use]
    pub const fn literal(value: Value, line: usize) -> Self {
        Self::Literal { value, line }
    }
}

/// The four arithmetic operators. All of them share one precedence level and
/// associate to the left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
