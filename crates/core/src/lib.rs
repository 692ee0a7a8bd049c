//! Core types for TallyKV
//!
//! - [`Value`]: the scalar stored under a cache key
//! - [`EntryKey`], [`OperationName`]: identifiers
//! - [`Error`], [`Result`]: the internal error model

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use types::{EntryKey, OperationName};
pub use value::Value;
