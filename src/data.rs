//! Dynamically typed arguments for name-based dispatch.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::builder::TemplateFn;
use crate::error::Result;

/// A dynamically typed argument passed to a query primitive at runtime.
///
/// Host applications usually hold their data as loosely typed payloads
/// (JSON documents, form values). `Arg` carries such a value into the
/// [`registry`](crate::registry) so the validation layer can check its shape
/// before any query text is produced.
#[derive(Clone)]
pub enum Arg {
    Null,
    Bool(bool),
    Number(f64),

    /// Plain text: a term, a field name or an already-built fragment.
    Text(String),

    /// Ordered sequence of values.
    List(Vec<Arg>),

    /// Key/value object, kept opaque.
    Object(Map<String, Value>),

    /// A query template taking the host payload.
    Function(TemplateFn),
}

impl Arg {
    /// Wrap a closure as a [`Arg::Function`].
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<String> + Send + Sync + 'static,
    {
        Arg::Function(Arc::new(f))
    }

    /// Short name of this value's shape, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Null => "null",
            Arg::Bool(_) => "boolean",
            Arg::Number(_) => "number",
            Arg::Text(_) => "text",
            Arg::List(_) => "list",
            Arg::Object(_) => "object",
            Arg::Function(_) => "function",
        }
    }

    /// Returns the text value if this is a Text variant.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Arg::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a Number variant.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Arg::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the template if this is a Function variant.
    pub fn as_function(&self) -> Option<&TemplateFn> {
        match self {
            Arg::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Arg::Null)
    }

    /// Loose truthiness: `null`, `false`, `0`, `NaN` and empty text are false,
    /// everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Arg::Null => false,
            Arg::Bool(b) => *b,
            Arg::Number(n) => *n != 0.0 && !n.is_nan(),
            Arg::Text(s) => !s.is_empty(),
            Arg::List(_) | Arg::Object(_) | Arg::Function(_) => true,
        }
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Null => write!(f, "Null"),
            Arg::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Arg::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Arg::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Arg::List(items) => f.debug_tuple("List").field(items).finish(),
            Arg::Object(map) => f.debug_tuple("Object").field(map).finish(),
            Arg::Function(_) => write!(f, "Function(..)"),
        }
    }
}

impl PartialEq for Arg {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Arg::Null, Arg::Null) => true,
            (Arg::Bool(a), Arg::Bool(b)) => a == b,
            (Arg::Number(a), Arg::Number(b)) => a == b,
            (Arg::Text(a), Arg::Text(b)) => a == b,
            (Arg::List(a), Arg::List(b)) => a == b,
            (Arg::Object(a), Arg::Object(b)) => a == b,
            (Arg::Function(a), Arg::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Text(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Text(s)
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<f64> for Arg {
    fn from(n: f64) -> Self {
        Arg::Number(n)
    }
}

impl From<f32> for Arg {
    fn from(n: f32) -> Self {
        Arg::Number(n as f64)
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Arg::Number(n as f64)
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Arg::Number(n as f64)
    }
}

impl From<u32> for Arg {
    fn from(n: u32) -> Self {
        Arg::Number(n as f64)
    }
}

impl From<u64> for Arg {
    fn from(n: u64) -> Self {
        Arg::Number(n as f64)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Null, Into::into)
    }
}

impl From<Vec<Arg>> for Arg {
    fn from(items: Vec<Arg>) -> Self {
        Arg::List(items)
    }
}

impl From<TemplateFn> for Arg {
    fn from(f: TemplateFn) -> Self {
        Arg::Function(f)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Arg::Null,
            Value::Bool(b) => Arg::Bool(b),
            // Every JSON number is representable as f64, possibly with rounding.
            Value::Number(n) => Arg::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Arg::Text(s),
            Value::Array(items) => Arg::List(items.into_iter().map(Arg::from).collect()),
            Value::Object(map) => Arg::Object(map),
        }
    }
}

impl From<&Value> for Arg {
    fn from(value: &Value) -> Self {
        Arg::from(value.clone())
    }
}
