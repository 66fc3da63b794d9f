//! # cfglang
//!
//! cfglang is an interpreter for a small declarative configuration language.
//! A program declares variables with `var`, computes constants with `?{ ... }`
//! and lists dictionaries with `$[ ... ]`; every top-level dictionary becomes
//! one element of the JSON array the interpreter prints.
//!
//! ```text
//! *> service settings
//! var port 8080
//! var workers ?{ 2 + 2 * 3 }
//! $[name: 'api', port: port, workers: workers, ratio: pow(2, 10)]
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Context, lexer::tokenize, parser::core::parse_program,
        value::core::Value,
    },
};

/// Defines the nodes the parser produces.
///
/// Nodes are either already concrete literals or unresolved references,
/// calls, arithmetic and dictionaries that the evaluator reduces later.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Every failure carries the line it happened on where one is known and maps
/// onto one of four kinds: lexical, syntax, name and evaluation errors.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
pub mod interpreter;

/// Runs a program against an existing context.
///
/// The whole source is tokenized, then parsed (evaluating declarations and
/// constant expressions along the way), and finally every collected top-level
/// node is reduced. `Null` results are left out.
///
/// # Errors
/// The first lexing, parsing or evaluation error aborts the run; no partial
/// result is returned.
///
/// # Examples
/// ```
/// use cfglang::{interpreter::{evaluator::core::Context, value::core::Value}, run};
///
/// let mut context = Context::with_diagnostics(Box::new(std::io::sink()));
/// let values = run("var x 10\n$[a: x]", &mut context).unwrap();
///
/// let Value::Dictionary(entries) = &values[0] else { panic!("expected a dictionary") };
/// assert_eq!(entries["a"], Value::Integer(10));
/// ```
pub fn run(source: &str, context: &mut Context) -> Result<Vec<Value>, Error> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let nodes = parse_program(&mut iter, context)?;
    log::debug!("parsed {} statements into {} top-level nodes",
                context.current_statement(),
                nodes.len());

    let mut results = Vec::with_capacity(nodes.len());
    for node in &nodes {
        let value = context.reduce_value(node)?;
        if !value.is_null() {
            results.push(value);
        }
    }

    Ok(results)
}

/// Runs a program in a fresh context that prints diagnostics to standard
/// error.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use cfglang::get_result;
///
/// assert!(get_result("var x 10\n$[a: x]").is_ok());
///
/// // 'y' is never declared.
/// assert!(get_result("$[a: y]").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Vec<Value>, Error> {
    run(source, &mut Context::new())
}

/// Renders results as a pretty-printed JSON array with two-space indentation.
/// Non-ASCII text is written as is.
///
/// # Examples
/// ```
/// use cfglang::{get_result, to_json};
///
/// let values = get_result("$[p: pow(2, 10), name: 'ü']").unwrap();
/// assert_eq!(to_json(&values).unwrap(),
///            "[\n  {\n    \"p\": 1024.0,\n    \"name\": \"ü\"\n  }\n]");
/// ```
pub fn to_json(values: &[Value]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(values)
}
