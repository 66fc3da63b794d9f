use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{pow, print},
        },
        value::core::Value,
    },
};

/// Signature shared by every built-in.
///
/// A built-in receives the diagnostic channel, a slice of evaluated argument
/// values and the line number of the call.
type BuiltinFn = fn(&mut dyn Write, &[Value], usize) -> EvalResult<Value>;

/// How many arguments a built-in takes. `print` is the only variadic one.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    Variadic,
}

/// Builds the static registry from `name => { arity, func }` entries.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "pow"   => { arity: Arity::Exact(2), func: pow::pow },
    "print" => { arity: Arity::Variadic, func: print::print },
}

impl Context {
    /// Calls the built-in `name` with already reduced arguments.
    ///
    /// # Errors
    /// - `UnknownFunction` if `name` is not a built-in.
    /// - `ArgumentCountMismatch` if the arity does not match.
    /// - Whatever the built-in itself reports.
    ///
    /// # Example
    /// ```
    /// use cfglang::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// let result = context.eval_function("pow", &[Value::Integer(2), Value::Integer(10)], 1);
    ///
    /// assert_eq!(result.unwrap(), Value::Float(1024.0));
    /// assert!(context.eval_function("sqrt", &[Value::Integer(4)], 1).is_err());
    /// ```
    pub fn eval_function(&mut self, name: &str, arg_vals: &[Value], line: usize)
                         -> EvalResult<Value> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == name)
                                   .ok_or_else(|| RuntimeError::UnknownFunction { name:
                                                                                      name.to_string(),
                                                                                  line })?;

        if let Arity::Exact(expected) = builtin.arity
           && expected != arg_vals.len()
        {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected,
                                                             found: arg_vals.len(),
                                                             line });
        }

        log::trace!("calling built-in '{name}' with {} arguments", arg_vals.len());
        (builtin.func)(self.diagnostics(), arg_vals, line)
    }
}
