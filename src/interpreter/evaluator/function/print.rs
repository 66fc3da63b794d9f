use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Writes the arguments, separated by spaces and followed by a newline, to the
/// diagnostic channel and returns `Null`.
///
/// Any number of arguments is accepted; values use their `Display` form.
///
/// # Example
/// ```
/// use cfglang::interpreter::{evaluator::function::print::print, value::core::Value};
///
/// let mut out = Vec::new();
/// let result = print(&mut out, &[Value::from("port"), Value::Integer(8080)], 1).unwrap();
///
/// assert_eq!(result, Value::Null);
/// assert_eq!(String::from_utf8(out).unwrap(), "port 8080\n");
/// ```
pub fn print(out: &mut dyn Write, args: &[Value], line: usize) -> EvalResult<Value> {
    let text = args.iter()
                   .map(ToString::to_string)
                   .collect::<Vec<_>>()
                   .join(" ");

    writeln!(out, "{text}").map_err(|e| RuntimeError::DiagnosticsUnavailable { details:
                                                                                   e.to_string(),
                                                                               line })?;
    Ok(Value::Null)
}
