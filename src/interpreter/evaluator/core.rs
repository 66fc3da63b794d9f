use std::{
    collections::{HashMap, hash_map::Entry},
    io::Write,
};

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::value::core::{Dictionary, Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A declared variable.
#[derive(Debug, Clone, PartialEq)]
struct Binding {
    value:       Value,
    /// Ordinal of the statement that first declared the name.
    declared_in: usize,
}

/// Stores the runtime evaluation context of one run.
///
/// The context owns the symbol table, counts top-level statements so that
/// deferred references can tell earlier declarations from later ones, and
/// holds the channel `print` writes to.
///
/// ## Usage
///
/// A `Context` is created once per program. The parser writes declarations
/// into it and evaluates nested expressions against it; afterwards the same
/// context reduces the collected top-level nodes.
pub struct Context {
    symbols:     HashMap<String, Binding>,
    statement:   usize,
    diagnostics: Box<dyn Write>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
         .field("symbols", &self.symbols)
         .field("statement", &self.statement)
         .finish_non_exhaustive()
    }
}

impl Context {
    /// Creates a context with an empty symbol table that prints diagnostics
    /// to standard error.
    #[must_use]
    pub fn new() -> Self {
        Self::with_diagnostics(Box::new(std::io::stderr()))
    }

    /// Creates a context whose `print` output goes to `diagnostics`.
    #[must_use]
    pub fn with_diagnostics(diagnostics: Box<dyn Write>) -> Self {
        Self { symbols: HashMap::new(),
               statement: 0,
               diagnostics }
    }

    /// Marks the start of the next top-level statement.
    pub const fn begin_statement(&mut self) {
        self.statement += 1;
    }

    /// Ordinal of the statement currently being parsed.
    #[must_use]
    pub const fn current_statement(&self) -> usize {
        self.statement
    }

    /// Stores `value` under `name`, replacing any previous value. A name
    /// keeps the statement of its first declaration.
    pub fn declare(&mut self, name: &str, value: Value) {
        let statement = self.statement;
        log::debug!("declared variable '{name}' = {value}");
        match self.symbols.entry(name.to_string()) {
            Entry::Occupied(mut entry) => entry.get_mut().value = value,
            Entry::Vacant(entry) => {
                entry.insert(Binding { value,
                                       declared_in: statement });
            },
        }
    }

    /// Looks up a variable as seen from statement `statement`.
    ///
    /// Only names first declared in a strictly earlier statement are visible.
    ///
    /// # Errors
    /// `RuntimeError::UnknownVariable` when no such declaration exists.
    ///
    /// # Example
    /// ```
    /// use cfglang::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.begin_statement();
    /// context.declare("x", Value::Integer(10));
    ///
    /// assert!(context.lookup("x", 1, 1).is_err());
    /// assert_eq!(context.lookup("x", 2, 1).unwrap(), Value::Integer(10));
    /// ```
    pub fn lookup(&self, name: &str, statement: usize, line: usize) -> EvalResult<Value> {
        self.symbols
            .get(name)
            .filter(|binding| binding.declared_in < statement)
            .map(|binding| binding.value.clone())
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// The channel `print` writes to.
    pub(crate) fn diagnostics(&mut self) -> &mut dyn Write {
        self.diagnostics.as_mut()
    }

    /// Reduces a node to a concrete value.
    ///
    /// Literals pass through, variable references are looked up, function
    /// calls reduce their arguments and dispatch to the built-in registry,
    /// dictionaries reduce every entry and arithmetic is handed to
    /// [`Context::reduce_expr`].
    ///
    /// # Errors
    /// Any `RuntimeError` raised while resolving names or evaluating
    /// arithmetic and built-ins.
    pub fn reduce_value(&mut self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::Literal { value, .. } => Ok(value.clone()),
            Node::VariableRef { name,
                                statement,
                                line, } => self.lookup(name, *statement, *line),
            Node::FunctionCall { name,
                                 arguments,
                                 line, } => {
                let arg_vals = arguments.iter()
                                        .map(|arg| self.reduce_value(arg))
                                        .collect::<EvalResult<Vec<_>>>()?;
                self.eval_function(name, &arg_vals, *line)
            },
            Node::Dictionary { entries, .. } => self.reduce_dictionary(entries),
            Node::BinaryOp { .. } => self.reduce_expr(node),
        }
    }

    /// Materializes dictionary entries. Later duplicates overwrite earlier
    /// ones but keep the position of the first occurrence.
    fn reduce_dictionary(&mut self, entries: &[(String, Node)]) -> EvalResult<Value> {
        let mut dictionary = Dictionary::with_capacity(entries.len());
        for (key, node) in entries {
            let value = self.reduce_value(node)?;
            dictionary.insert(key.clone(), value);
        }
        Ok(Value::Dictionary(dictionary))
    }
}
