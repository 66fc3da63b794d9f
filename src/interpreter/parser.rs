/// Program-level parsing.
///
/// Declares the shared result type and the loop over top-level statements.
pub mod core;
/// Statement parsing: declarations, bare dictionaries and bare constant
/// expressions.
pub mod statement;
/// Value parsing, including dictionary literals.
pub mod value;
/// Arithmetic expressions inside `?{ ... }` and argument lists.
pub mod expression;
/// Built-in function calls.
pub mod call;
/// Helpers shared by the parsing modules.
pub mod utils;
