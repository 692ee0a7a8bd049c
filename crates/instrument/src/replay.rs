//! Replay of an instrumented operation
//!
//! Combines the call counter and the call history into a printable
//! report:
//!
//! ```text
//! Cache.write was called 2 times:
//! Cache.write(*("foo",)) -> 0b9d6c3e-...
//! Cache.write(*(42,)) -> 5f1a7e02-...
//! ```

use crate::counter::call_count;
use crate::history::History;
use serde::Serialize;
use std::fmt;
use tallykv_core::{OperationName, Result, Value};
use tallykv_storage::KvProtocol;

/// Snapshot of an operation's counter and history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Replay {
    /// Operation replayed
    pub name: OperationName,
    /// Counter value at load time
    pub calls: i64,
    /// Completed calls, oldest first
    pub entries: Vec<(String, Value)>,
}

impl Replay {
    /// Load the counter and history of `name`
    pub fn load(store: &dyn KvProtocol, name: &OperationName) -> Result<Self> {
        let calls = call_count(store, name)?;
        let history = History::load(store, name)?;
        let entries = history
            .pairs()
            .map(|(input, output)| (input.to_string(), output.clone()))
            .collect();
        Ok(Self {
            name: name.clone(),
            calls,
            entries,
        })
    }

    /// Report lines, header first
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(format!("{} was called {} times:", self.name, self.calls));
        for (input, output) in &self.entries {
            lines.push(format!("{}(*{}) -> {}", self.name, input, output));
        }
        lines
    }
}

impl fmt::Display for Replay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
