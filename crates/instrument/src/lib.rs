//! Instrumentation for TallyKV
//!
//! Operations are wrapped explicitly: a [`Layer`] turns one [`Operation`]
//! into another, and a [`Pipeline`] applies an ordered list of layers, the
//! first one added ending up outermost.
//!
//! ```text
//! Pipeline::new()
//!     .layer(CountCalls::new(store.clone()))   // outermost
//!     .layer(CallHistory::new(store.clone()))  // innermost
//!     .build(write)
//! ```
//!
//! The read side has no layers; it goes through [`Converter`] dispatch.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod counter;
pub mod history;
pub mod layer;
pub mod replay;

pub use convert::Converter;
pub use counter::{call_count, CountCalls};
pub use history::{CallHistory, History};
pub use layer::{layer_fn, FnOperation, Layer, LayerFn, Operation, Pipeline};
pub use replay::Replay;
