//! Internal error types
//!
//! Every crate below the public facade reports failures through [`Error`].
//! The root crate maps these onto its user-facing error type.

use thiserror::Error;

/// Errors raised by the store engine, the instrumentation layers and the
/// read-side converters.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying store failed (connectivity, engine fault)
    #[error("storage error: {0}")]
    Storage(String),

    /// A store command hit an entry of the wrong kind
    #[error("wrong type: expected {expected}, got {actual}")]
    WrongType {
        /// Expected kind
        expected: String,
        /// Actual kind found
        actual: String,
    },

    /// Integer arithmetic left the i64 range
    #[error("overflow: {0}")]
    Overflow(String),

    /// A read-side converter rejected the stored value
    #[error("cannot convert {actual} to {target}: {reason}")]
    Conversion {
        /// Requested type
        target: &'static str,
        /// Type of the stored value
        actual: &'static str,
        /// Why the conversion failed
        reason: String,
    },

    /// Bug or invariant violation
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Shorthand for a [`Error::WrongType`]
    pub fn wrong_type(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Error::WrongType {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Shorthand for a [`Error::Conversion`]
    pub fn conversion(target: &'static str, actual: &'static str, reason: impl Into<String>) -> Self {
        Error::Conversion {
            target,
            actual,
            reason: reason.into(),
        }
    }
}

/// Result type for internal operations
pub type Result<T> = std::result::Result<T, Error>;
