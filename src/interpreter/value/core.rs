use indexmap::IndexMap;
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Concrete entries of a dictionary in first-insertion order.
pub type Dictionary = IndexMap<String, Value>;

/// Represents a runtime value in the interpreter.
///
/// Integers and floats are kept apart: a numeral without a decimal point stays
/// an integer all the way to the output, while division and `pow` always
/// produce floats.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Float(f64),
    /// Text from a single-quoted literal.
    Str(String),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A mapping from keys to values.
    Dictionary(Dictionary),
    /// The result of calls that produce nothing, such as `print`.
    Null,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Dictionary> for Value {
    fn from(v: Dictionary) -> Self {
        Self::Dictionary(v)
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Float` and `Value::Integer`.
    /// Integers beyond 2^53 are rounded to the nearest float.
    ///
    /// # Example
    /// ```
    /// use cfglang::interpreter::value::core::Value;
    ///
    /// let x = Value::Integer(10);
    /// assert_eq!(x.as_float(1).unwrap(), 10.0);
    /// assert!(Value::Bool(true).as_float(1).is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Float(r) => Ok(*r),
            Self::Integer(n) => Ok(*n as f64),
            _ => Err(RuntimeError::ExpectedNumber { found: self.type_name(),
                                                    line }),
        }
    }

    /// Whether the value is `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Dictionary(_) => "dictionary",
            Self::Null => "null",
        }
    }
}

/// Textual form used by `print`.
///
/// Floats always show a fractional part, strings are written without quotes
/// and dictionaries are rendered as compact JSON.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r:?}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Dictionary(_) => {
                let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
                write!(f, "{json}")
            },
            Self::Null => write!(f, "null"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Float(r) => serializer.serialize_f64(*r),
            Self::Str(s) => serializer.serialize_str(s),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Dictionary(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            },
            Self::Null => serializer.serialize_unit(),
        }
    }
}
