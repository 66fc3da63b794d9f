use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Raises `args[0]` to the power `args[1]`.
///
/// Accepts exactly two numeric arguments. Integers are converted to floats
/// first, and the result is always a float, even for integer operands.
///
/// # Errors
/// - `ExpectedNumber` for non-numeric arguments.
/// - `Overflow` if the result is infinite.
/// - `DomainError` if the result is not a number, such as a fractional power
///   of a negative base.
///
/// # Example
/// ```
/// use cfglang::interpreter::{evaluator::function::pow::pow, value::core::Value};
///
/// let result = pow(&mut std::io::sink(), &[Value::Integer(2), Value::Integer(3)], 1).unwrap();
/// assert_eq!(result, Value::Float(8.0));
/// ```
pub fn pow(_: &mut dyn Write, args: &[Value], line: usize) -> EvalResult<Value> {
    let [base, exponent] = args else {
        return Err(RuntimeError::ArgumentCountMismatch { name:     "pow".to_string(),
                                                         expected: 2,
                                                         found:    args.len(),
                                                         line, });
    };
    let base = base.as_float(line)?;
    let exponent = exponent.as_float(line)?;

    let result = base.powf(exponent);
    if result.is_nan() {
        return Err(RuntimeError::DomainError { details: format!("pow({base:?}, {exponent:?})"),
                                               line });
    }
    if result.is_infinite() {
        return Err(RuntimeError::Overflow { line });
    }
    Ok(Value::Float(result))
}
