//! Public types for the TallyKV API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Core value types
pub use tallykv_core::Value;
pub use tallykv_core::{EntryKey, OperationName};

// Internal error type, returned by custom converters and operations
pub use tallykv_core::Error as CoreError;

// Store protocol and the embedded engine
pub use tallykv_storage::{KvProtocol, MemoryStore};

// Instrumentation
pub use tallykv_instrument::{
    layer_fn, CallHistory, Converter, CountCalls, FnOperation, History, Layer, LayerFn,
    Operation, Pipeline, Replay,
};
