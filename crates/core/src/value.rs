//! Value types for TallyKV
//!
//! The cache stores scalars only. [`Value`] has exactly four variants and
//! mirrors what a key-value engine can hold under a plain key.
//!
//! ## Contract
//!
//! - No implicit type coercions: `Int(1) != Float(1.0)`,
//!   `String("abc") != Bytes(b"abc")`
//! - IEEE-754 float equality semantics
//! - Coercion happens only on read, through an explicit converter

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical scalar value
///
/// ## The Four Types
///
/// 1. `String` - UTF-8 encoded text
/// 2. `Bytes` - Arbitrary binary data (distinct from String)
/// 3. `Int` - 64-bit signed integer
/// 4. `Float` - 64-bit IEEE-754 floating point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// UTF-8 encoded string
    String(String),

    /// Arbitrary binary data
    /// NOT equivalent to String - distinct type
    Bytes(Vec<u8>),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit IEEE-754 floating point
    Float(f64),
}

impl Value {
    /// Returns the type name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as bytes slice
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Stable literal rendering used by call history records.
    ///
    /// | Variant | Rendering |
    /// |---------|-----------|
    /// | `String("foo")` | `"foo"` |
    /// | `Bytes(b"foo")` | `b"foo"` (non-printable bytes as `\xNN`) |
    /// | `Int(42)` | `42` |
    /// | `Float(1.5)` | `1.5` |
    pub fn repr(&self) -> String {
        match self {
            Value::String(s) => format!("{:?}", s),
            Value::Bytes(b) => format!("b\"{}\"", b.escape_ascii()),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => format!("{:?}", f),
        }
    }

    /// Render positional arguments as a tuple literal.
    ///
    /// A single argument keeps its trailing comma: `("foo",)`.
    pub fn repr_tuple(args: &[Value]) -> String {
        match args {
            [] => "()".to_string(),
            [only] => format!("({},)", only.repr()),
            many => {
                let parts: Vec<String> = many.iter().map(Value::repr).collect();
                format!("({})", parts.join(", "))
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            other => f.write_str(&other.repr()),
        }
    }
}

// ============================================================================
// Custom PartialEq Implementation (IEEE-754 semantics, no type coercion)
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // IEEE-754 equality: NaN != NaN, but -0.0 == 0.0
            (Value::Float(a), Value::Float(b)) => a == b,
            _ => false,
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(b: &[u8; N]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

// ============================================================================
// Tests
// ============================================================================
