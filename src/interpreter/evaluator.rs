/// Core evaluation logic and context management.
///
/// Contains the interpreter context holding the symbol table and the
/// diagnostic sink, and the structural reduction of nodes to values.
pub mod core;

/// Arithmetic evaluation.
///
/// Reduces `BinaryOp` trees and applies `+ - * /` to concrete values.
pub mod binary;

/// Function evaluation.
///
/// Holds the built-in registry and dispatches calls to it.
pub mod function;
