//! Call history layer
//!
//! Records every call as a pair of list entries:
//!
//! ```text
//! RPUSH <name>:inputs  ("foo",)     before delegating
//! RPUSH <name>:outputs <result>     after the call returns Ok
//! ```
//!
//! `inputs[i]` and `outputs[i]` belong to the same call as long as the
//! operation is not invoked concurrently; nothing here serializes calls.
//! A failed call leaves its input recorded and pushes no output.

use crate::layer::{Layer, Operation};
use serde::Serialize;
use std::sync::Arc;
use tallykv_core::{OperationName, Result, Value};
use tallykv_storage::KvProtocol;
use tracing::{debug, warn};

/// Layer that records arguments and results of the wrapped operation
#[derive(Clone)]
pub struct CallHistory {
    store: Arc<dyn KvProtocol>,
}

impl CallHistory {
    /// Record history in `store`
    pub fn new(store: Arc<dyn KvProtocol>) -> Self {
        Self { store }
    }
}

impl Layer for CallHistory {
    fn wrap(&self, inner: Arc<dyn Operation>) -> Arc<dyn Operation> {
        Arc::new(Recorded {
            store: Arc::clone(&self.store),
            inputs_key: inner.name().inputs_key(),
            outputs_key: inner.name().outputs_key(),
            inner,
        })
    }
}

struct Recorded {
    store: Arc<dyn KvProtocol>,
    inputs_key: String,
    outputs_key: String,
    inner: Arc<dyn Operation>,
}

impl Operation for Recorded {
    fn name(&self) -> &OperationName {
        self.inner.name()
    }

    fn call(&self, args: &[Value]) -> Result<Value> {
        let record = Value::repr_tuple(args);
        let pending = self.store.rpush(&self.inputs_key, Value::String(record))?;

        let output = match self.inner.call(args) {
            Ok(output) => output,
            Err(e) => {
                warn!("{} failed after recording input #{}: {}", self.inner.name(), pending, e);
                return Err(e);
            }
        };

        let recorded = self.store.rpush(&self.outputs_key, output.clone())?;
        debug!("{} history: {} inputs, {} outputs", self.inner.name(), pending, recorded);
        Ok(output)
    }
}

/// Paired inputs and outputs recorded for one operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct History {
    /// Operation the history belongs to
    pub name: OperationName,
    /// Stringified argument tuples, oldest first
    pub inputs: Vec<String>,
    /// Results, oldest first
    pub outputs: Vec<Value>,
}

impl History {
    /// Read the full history of `name` from `store`
    pub fn load(store: &dyn KvProtocol, name: &OperationName) -> Result<Self> {
        let inputs = store
            .lrange(&name.inputs_key(), 0, -1)?
            .into_iter()
            .map(|v| v.to_string())
            .collect();
        let outputs = store.lrange(&name.outputs_key(), 0, -1)?;
        Ok(Self {
            name: name.clone(),
            inputs,
            outputs,
        })
    }

    /// Number of recorded calls (inputs)
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Check if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Calls that completed, as (input, output) pairs
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.inputs
            .iter()
            .map(String::as_str)
            .zip(self.outputs.iter())
    }
}
