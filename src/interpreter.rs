/// The evaluator module reduces nodes to values.
///
/// It owns the interpreter context (symbol table and diagnostic channel),
/// resolves variable references, performs arithmetic and dispatches built-in
/// function calls.
///
/// # Responsibilities
/// - Reduces structural nodes: variables, calls and dictionaries.
/// - Reduces arithmetic trees with integer/float fidelity.
/// - Reports runtime errors such as unknown names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens for keywords,
/// delimiters, literals, identifiers and operators, each tagged with its line
/// and column. Comments and whitespace never leave this stage.
pub mod lexer;
/// The parser module recognizes statements and builds nodes.
///
/// Parsing and evaluation are interleaved: declarations and constant
/// expressions are evaluated as soon as they are recognized, while top-level
/// dictionaries are collected for the final pass.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
