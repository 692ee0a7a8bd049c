//! Call counting layer
//!
//! Each call increments the counter stored under the operation's name,
//! then delegates. The counter lives in the store, so it outlives the
//! wrapper and is cleared only when the store is flushed.

use crate::convert::to_int;
use crate::layer::{Layer, Operation};
use std::sync::Arc;
use tallykv_core::{OperationName, Result, Value};
use tallykv_storage::KvProtocol;
use tracing::debug;

/// Layer that counts invocations of the wrapped operation
#[derive(Clone)]
pub struct CountCalls {
    store: Arc<dyn KvProtocol>,
}

impl CountCalls {
    /// Count calls in `store`
    pub fn new(store: Arc<dyn KvProtocol>) -> Self {
        Self { store }
    }
}

impl Layer for CountCalls {
    fn wrap(&self, inner: Arc<dyn Operation>) -> Arc<dyn Operation> {
        Arc::new(Counted {
            store: Arc::clone(&self.store),
            inner,
        })
    }
}

struct Counted {
    store: Arc<dyn KvProtocol>,
    inner: Arc<dyn Operation>,
}

impl Operation for Counted {
    fn name(&self) -> &OperationName {
        self.inner.name()
    }

    fn call(&self, args: &[Value]) -> Result<Value> {
        let name = self.inner.name();
        let count = self.store.incr(name.counter_key())?;
        debug!("{} call #{}", name, count);
        self.inner.call(args)
    }
}

/// Current call count of `name`, 0 if it was never called
///
/// The counter has the range of INCR. A counter seeded below zero reads
/// back as is, so the difference between two reads is the number of calls
/// in between.
pub fn call_count(store: &dyn KvProtocol, name: &OperationName) -> Result<i64> {
    match store.get(name.counter_key())? {
        None => Ok(0),
        Some(value) => to_int(&value),
    }
}
