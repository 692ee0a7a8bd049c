//! The key-value store protocol
//!
//! A deliberately small, Redis-shaped command set. Any engine that can
//! serve these commands can back a cache: an embedded map, a networked
//! server behind a client, a test double.
//!
//! ## Commands
//!
//! | Method | Redis | Semantics |
//! |--------|-------|-----------|
//! | `get` | GET | Scalar at key, `None` if absent |
//! | `set` | SET | Overwrite whatever is at key |
//! | `incr` | INCR | Add 1 to an integer counter, creating it at 0 |
//! | `rpush` | RPUSH | Append to a list, creating it if absent |
//! | `lrange` | LRANGE | Inclusive slice of a list, negative indices from the end |
//! | `llen` | LLEN | List length, 0 if absent |
//! | `flush_all` | FLUSHDB | Drop every key |
//! | `len` | DBSIZE | Number of keys |
//!
//! Scalar commands against a list (and the reverse) fail with
//! [`Error::WrongType`](tallykv_core::Error::WrongType).

use tallykv_core::{Result, Value};

/// Minimal key-value store protocol
///
/// Implementations must be shareable across threads; the cache holds the
/// store behind an `Arc<dyn KvProtocol>`.
pub trait KvProtocol: Send + Sync {
    /// Get the scalar stored at `key`
    ///
    /// Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Store a scalar at `key`, replacing any previous entry
    fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Increment the integer counter at `key` by one
    ///
    /// A missing key counts from 0. Integer text (`"41"`) is accepted and
    /// replaced by the integer result. Returns the new value.
    fn incr(&self, key: &str) -> Result<i64>;

    /// Append `value` to the list at `key`
    ///
    /// Returns the list length after the push.
    fn rpush(&self, key: &str, value: Value) -> Result<usize>;

    /// Get list elements from `start` to `stop`, both inclusive
    ///
    /// Negative indices count from the end (`-1` is the last element).
    /// A missing key yields an empty list.
    fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<Value>>;

    /// Length of the list at `key`, 0 if absent
    fn llen(&self, key: &str) -> Result<usize>;

    /// Remove every key
    fn flush_all(&self) -> Result<()>;

    /// Number of keys currently stored
    fn len(&self) -> Result<usize>;

    /// Check if the store holds no keys
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
