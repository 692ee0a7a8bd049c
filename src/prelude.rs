//! Convenient imports for TallyKV.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use tallykv::prelude::*;
//!
//! let cache = Cache::ephemeral()?;
//! let key = cache.write(42)?;
//! assert_eq!(cache.read_int(key.as_str())?, Some(42));
//! # Ok::<(), tallykv::Error>(())
//! ```

// Main entry point
pub use crate::cache::{Cache, CacheBuilder};
pub use crate::options::CacheOptions;

// Error handling
pub use crate::error::{Error, Result};
pub use crate::types::CoreError;

// Core types
pub use crate::types::{Converter, EntryKey, OperationName, Value};

// Store
pub use crate::types::{KvProtocol, MemoryStore};
