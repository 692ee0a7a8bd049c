//! # TallyKV
//!
//! An instrumented scalar cache over a minimal key-value store protocol.
//!
//! Values are written under freshly generated keys and read back with an
//! optional conversion. Every write is counted and recorded (arguments and
//! result) in the store itself, next to the data.
//!
//! ## Quick Start
//!
//! ```
//! use tallykv::prelude::*;
//!
//! // Open over the embedded engine (the store is flushed on open)
//! let cache = Cache::ephemeral()?;
//!
//! // Write, then read back raw or converted
//! let key = cache.write("123")?;
//! assert_eq!(cache.read_raw(key.as_str())?, Some(Value::from("123")));
//! assert_eq!(cache.read(key.as_str(), Converter::AsInteger)?, Some(Value::Int(123)));
//!
//! // Missing keys are not errors
//! assert_eq!(cache.read_raw("nonexistent-key")?, None);
//!
//! // Instrumentation
//! assert_eq!(cache.write_count()?, 1);
//! let history = cache.write_history()?;
//! assert_eq!(history.inputs, vec!["(\"123\",)"]);
//! assert_eq!(history.outputs, vec![Value::from(key.as_str())]);
//! # Ok::<(), tallykv::Error>(())
//! ```
//!
//! ## Layout
//!
//! - [`Cache`] - write / read / reset plus counters and history
//! - [`KvProtocol`] - the store protocol; [`MemoryStore`] implements it
//! - [`Converter`] - read-side conversion
//! - [`Pipeline`], [`Layer`] - explicit operation wrapping

#![warn(missing_docs)]

mod cache;
mod error;
mod options;
mod types;

pub mod prelude;

// Re-export main entry points
pub use cache::{Cache, CacheBuilder};
pub use error::{Error, Result};
pub use options::CacheOptions;

// Re-export types
pub use types::*;
