use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Integer operands stay integers for `+`, `-` and `*` with checked
    /// overflow. A float on either side promotes both operands to float.
    /// Division always produces a float. Two strings may be joined with `+`.
    /// Every other combination is a type error.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use cfglang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result =
    ///     Context::eval_scalar_op(BinaryOperator::Div, &Value::Integer(10), &Value::Integer(4), 1);
    /// assert_eq!(result.unwrap(), Value::Float(2.5));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Float, Integer, Str};

        match (left, right) {
            (Str(a), Str(b)) if op == Add => Ok(Str(format!("{a}{b}"))),
            (Integer(a), Integer(b)) if op != Div => {
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    _ => a.checked_mul(*b),
                };
                result.map(Integer).ok_or(RuntimeError::Overflow { line })
            },
            (Integer(_) | Float(_), Integer(_) | Float(_)) => {
                let left = left.as_float(line)?;
                let right = right.as_float(line)?;

                let result = match op {
                    Add => left + right,
                    Sub => left - right,
                    Mul => left * right,
                    Div => {
                        if right == 0.0 {
                            return Err(RuntimeError::DivisionByZero { line });
                        }
                        left / right
                    },
                };
                if result.is_finite() {
                    Ok(Float(result))
                } else {
                    Err(RuntimeError::Overflow { line })
                }
            },
            _ => {
                Err(RuntimeError::TypeError { details: format!("unsupported operands for {op}: {} and {}",
                                                               left.type_name(),
                                                               right.type_name()),
                                              line })
            },
        }
    }
}
