//! Read-side type coercion
//!
//! A stored value comes back exactly as written unless the caller asks for
//! a conversion. [`Converter`] names the conversion; [`Converter::apply`]
//! is the dispatch.
//!
//! | Converter | String | Bytes | Int | Float |
//! |-----------|--------|-------|-----|-------|
//! | `Raw` | as is | as is | as is | as is |
//! | `AsInteger` | parse base 10 | UTF-8, parse base 10 | as is | error |
//! | `AsText` | as is | decode UTF-8 | decimal text | decimal text |
//! | `Custom(f)` | `f(v)` | `f(v)` | `f(v)` | `f(v)` |

use std::fmt;
use std::sync::Arc;
use tallykv_core::{Error, Result, Value};
use tracing::trace;

/// A user-supplied conversion
pub type ConvertFn = dyn Fn(Value) -> Result<Value> + Send + Sync;

/// How a read should decode the stored value
#[derive(Clone, Default)]
pub enum Converter {
    /// Return the stored value unchanged
    #[default]
    Raw,
    /// Parse as a base-10 `i64`
    AsInteger,
    /// Decode as UTF-8 text
    AsText,
    /// Apply an arbitrary function to the stored value
    Custom(Arc<ConvertFn>),
}

impl Converter {
    /// Wrap a closure as a [`Converter::Custom`]
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Converter::Custom(Arc::new(f))
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Converter::Raw => "raw",
            Converter::AsInteger => "integer",
            Converter::AsText => "text",
            Converter::Custom(_) => "custom",
        }
    }

    /// Convert a stored value
    ///
    /// Failures propagate; nothing falls back to the raw value.
    pub fn apply(&self, value: Value) -> Result<Value> {
        trace!("convert {} as {}", value.type_name(), self.name());
        match self {
            Converter::Raw => Ok(value),
            Converter::AsInteger => to_int(&value).map(Value::Int),
            Converter::AsText => to_text(value).map(Value::String),
            Converter::Custom(f) => f(value),
        }
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Converter::{}", self.name())
    }
}

/// Interpret a stored value as a base-10 integer
///
/// Surrounding whitespace is ignored; a leading sign is allowed.
pub fn to_int(value: &Value) -> Result<i64> {
    let text = match value {
        Value::Int(i) => return Ok(*i),
        Value::Float(_) => {
            return Err(Error::conversion("Int", "Float", "not an integer literal"));
        }
        Value::String(s) => s.as_str(),
        Value::Bytes(b) => std::str::from_utf8(b)
            .map_err(|e| Error::conversion("Int", "Bytes", e.to_string()))?,
    };
    text.trim()
        .parse::<i64>()
        .map_err(|e| Error::conversion("Int", value.type_name(), format!("{}: {:?}", e, text)))
}

/// Interpret a stored value as UTF-8 text
pub fn to_text(value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Bytes(b) => {
            String::from_utf8(b).map_err(|e| Error::conversion("String", "Bytes", e.to_string()))
        }
        number => Ok(number.repr()),
    }
}
