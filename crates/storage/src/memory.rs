//! Embedded in-memory engine
//!
//! DashMap keyed by string, FxHash for the shard hasher.
//!
//! # Design
//!
//! - DashMap: 16-way sharded by default, lock-free reads
//! - FxHash: fast non-crypto hash, keys are short UUIDs and names
//! - One slot per key holding either a scalar or a list
//!
//! Every command touches a single key, so each one only locks that key's
//! shard. Nothing here is durable: dropping the store drops the data.

use crate::protocol::KvProtocol;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;
use tallykv_core::{Error, Result, Value};
use tracing::trace;

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// What a key holds
#[derive(Debug)]
enum Slot {
    /// A single value (GET/SET/INCR)
    Scalar(Value),
    /// An ordered list of values (RPUSH/LRANGE/LLEN)
    List(Vec<Value>),
}

impl Slot {
    fn kind(&self) -> &'static str {
        match self {
            Slot::Scalar(_) => "scalar",
            Slot::List(_) => "list",
        }
    }
}

/// In-memory store implementing [`KvProtocol`]
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - get(): Lock-free read via DashMap
/// - set()/incr()/rpush(): Only lock the target key's shard
///
/// # Example
///
/// ```
/// use tallykv_storage::{KvProtocol, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.set("greeting", "hello".into()).unwrap();
/// assert_eq!(store.incr("visits").unwrap(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: DashMap<String, Slot, FxBuildHasher>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            slots: DashMap::with_hasher(FxBuildHasher::default()),
        }
    }

    /// Create with an expected number of keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: DashMap::with_capacity_and_hasher(capacity, FxBuildHasher::default()),
        }
    }
}

/// Resolve an inclusive, possibly negative, index range against `len`.
fn resolve_range(len: usize, start: i64, stop: i64) -> Option<(usize, usize)> {
    let len = len as i64;
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };
    if len == 0 || start > stop || start >= len {
        return None;
    }
    Some((start as usize, stop as usize))
}

fn parse_counter(value: &Value) -> Result<i64> {
    let text = match value {
        Value::Int(i) => return Ok(*i),
        Value::String(s) => s.as_str(),
        Value::Bytes(b) => std::str::from_utf8(b)
            .map_err(|_| Error::wrong_type("integer", "Bytes"))?,
        Value::Float(_) => return Err(Error::wrong_type("integer", "Float")),
    };
    text.parse::<i64>()
        .map_err(|_| Error::wrong_type("integer", value.type_name()))
}

impl KvProtocol for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        trace!("GET {}", key);
        match self.slots.get(key) {
            None => Ok(None),
            Some(slot) => match slot.value() {
                Slot::Scalar(v) => Ok(Some(v.clone())),
                other => Err(Error::wrong_type("scalar", other.kind())),
            },
        }
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        trace!("SET {} ({})", key, value.type_name());
        self.slots.insert(key.to_string(), Slot::Scalar(value));
        Ok(())
    }

    fn incr(&self, key: &str) -> Result<i64> {
        match self.slots.entry(key.to_string()) {
            Entry::Vacant(vacant) => {
                vacant.insert(Slot::Scalar(Value::Int(1)));
                Ok(1)
            }
            Entry::Occupied(mut occupied) => {
                let current = match occupied.get() {
                    Slot::Scalar(v) => parse_counter(v)?,
                    other => return Err(Error::wrong_type("scalar", other.kind())),
                };
                let next = current
                    .checked_add(1)
                    .ok_or_else(|| Error::Overflow(format!("increment of {} at {}", current, key)))?;
                occupied.insert(Slot::Scalar(Value::Int(next)));
                Ok(next)
            }
        }
    }

    fn rpush(&self, key: &str, value: Value) -> Result<usize> {
        let mut slot = self
            .slots
            .entry(key.to_string())
            .or_insert_with(|| Slot::List(Vec::new()));
        match slot.value_mut() {
            Slot::List(items) => {
                items.push(value);
                Ok(items.len())
            }
            other => Err(Error::wrong_type("list", other.kind())),
        }
    }

    fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<Value>> {
        match self.slots.get(key) {
            None => Ok(Vec::new()),
            Some(slot) => match slot.value() {
                Slot::List(items) => Ok(resolve_range(items.len(), start, stop)
                    .map(|(from, to)| items[from..=to].to_vec())
                    .unwrap_or_default()),
                other => Err(Error::wrong_type("list", other.kind())),
            },
        }
    }

    fn llen(&self, key: &str) -> Result<usize> {
        match self.slots.get(key) {
            None => Ok(0),
            Some(slot) => match slot.value() {
                Slot::List(items) => Ok(items.len()),
                other => Err(Error::wrong_type("list", other.kind())),
            },
        }
    }

    fn flush_all(&self) -> Result<()> {
        trace!("FLUSHDB ({} keys)", self.slots.len());
        self.slots.clear();
        Ok(())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.slots.len())
    }
}
