//! Unified error types for TallyKV.
//!
//! This module provides a clean error type that wraps internal errors
//! and presents a consistent interface to users.

use thiserror::Error;

/// All TallyKV errors.
///
/// This is the canonical error type for all cache operations. A missing key
/// is never an error: reads return `Ok(None)`.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying store failed
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

    /// Counter arithmetic overflowed
    #[error("overflow: {0}")]
    Overflow(String),

    /// The stored value could not be converted to the requested type
    #[error("cannot convert {actual} to {target}: {reason}")]
    Conversion {
        /// Requested type
        target: String,
        /// Type of the stored value
        actual: String,
        /// Why the conversion failed
        reason: String,
    },

    /// Invalid cache options
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for TallyKV operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if a read-side conversion failed.
    pub fn is_conversion(&self) -> bool {
        matches!(self, Error::Conversion { .. })
    }

    /// Check if the underlying store failed.
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Storage(_))
    }

    /// Check if a store command hit an entry of the wrong kind.
    pub fn is_wrong_type(&self) -> bool {
        matches!(self, Error::WrongType { .. })
    }

    /// Check if this is a serious/unrecoverable error.
    pub fn is_serious(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}

// Convert from internal core errors
impl From<tallykv_core::Error> for Error {
    fn from(e: tallykv_core::Error) -> Self {
        use tallykv_core::Error as CoreError;
        match e {
            CoreError::Storage(msg) => Error::Storage(msg),
            CoreError::WrongType { expected, actual } => Error::WrongType { expected, actual },
            CoreError::Overflow(msg) => Error::Overflow(msg),
            CoreError::Conversion {
                target,
                actual,
                reason,
            } => Error::Conversion {
                target: target.to_string(),
                actual: actual.to_string(),
                reason,
            },
            CoreError::Internal(msg) => Error::Internal(msg),
        }
    }
}

// Convert from option parsing errors
impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
