//! Storage layer for TallyKV
//!
//! This crate defines the store protocol the cache is written against and
//! ships one engine for it:
//! - [`KvProtocol`]: GET / SET / INCR / RPUSH / LRANGE / LLEN / FLUSHDB
//! - [`MemoryStore`]: embedded engine on a DashMap with FxHash

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;
pub mod protocol;

pub use memory::MemoryStore;
pub use protocol::KvProtocol;
