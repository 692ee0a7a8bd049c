//! Shared test utilities for the integration suites.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tallykv::{Cache, CoreError, KvProtocol, MemoryStore, Value};

/// Install an env-filtered tracing subscriber once per test binary.
///
/// Set `RUST_LOG=tallykv=debug` to see layer output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Open a cache over a fresh embedded store.
pub fn fresh_cache() -> Cache {
    init_tracing();
    Cache::ephemeral().expect("Failed to open ephemeral cache")
}

/// Open a cache and hand back the store it writes to.
pub fn cache_with_store() -> (Cache, Arc<dyn KvProtocol>) {
    init_tracing();
    let store: Arc<dyn KvProtocol> = Arc::new(MemoryStore::new());
    let cache = Cache::open(Arc::clone(&store)).expect("Failed to open cache");
    (cache, store)
}

/// Standard test values covering every scalar type
pub fn standard_test_values() -> Vec<(&'static str, Value)> {
    vec![
        ("int_pos", Value::Int(42)),
        ("int_neg", Value::Int(-42)),
        ("int_zero", Value::Int(0)),
        ("int_max", Value::Int(i64::MAX)),
        ("float_pos", Value::Float(3.14159)),
        ("float_neg", Value::Float(-2.71828)),
        ("string", Value::String("hello world".into())),
        ("string_unicode", Value::String("日本語 🌍".into())),
        ("string_empty", Value::String("".into())),
        ("bytes", Value::Bytes(vec![0x00, 0x01, 0xFF, 0xFE])),
        ("bytes_empty", Value::Bytes(vec![])),
    ]
}

/// Store double that can be told to fail like a dropped connection.
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    fail_set: AtomicBool,
    fail_get: AtomicBool,
    fail_incr: AtomicBool,
    fail_len: AtomicBool,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_set(&self, fail: bool) {
        self.fail_set.store(fail, Ordering::SeqCst);
    }

    pub fn fail_get(&self, fail: bool) {
        self.fail_get.store(fail, Ordering::SeqCst);
    }

    pub fn fail_incr(&self, fail: bool) {
        self.fail_incr.store(fail, Ordering::SeqCst);
    }

    pub fn fail_len(&self, fail: bool) {
        self.fail_len.store(fail, Ordering::SeqCst);
    }

    fn check(flag: &AtomicBool, command: &str) -> tallykv_core::Result<()> {
        if flag.load(Ordering::SeqCst) {
            Err(CoreError::Storage(format!("{}: connection refused", command)))
        } else {
            Ok(())
        }
    }
}

impl KvProtocol for FlakyStore {
    fn get(&self, key: &str) -> tallykv_core::Result<Option<Value>> {
        Self::check(&self.fail_get, "GET")?;
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: Value) -> tallykv_core::Result<()> {
        Self::check(&self.fail_set, "SET")?;
        self.inner.set(key, value)
    }

    fn incr(&self, key: &str) -> tallykv_core::Result<i64> {
        Self::check(&self.fail_incr, "INCR")?;
        self.inner.incr(key)
    }

    fn rpush(&self, key: &str, value: Value) -> tallykv_core::Result<usize> {
        self.inner.rpush(key, value)
    }

    fn lrange(&self, key: &str, start: i64, stop: i64) -> tallykv_core::Result<Vec<Value>> {
        self.inner.lrange(key, start, stop)
    }

    fn llen(&self, key: &str) -> tallykv_core::Result<usize> {
        self.inner.llen(key)
    }

    fn flush_all(&self) -> tallykv_core::Result<()> {
        self.inner.flush_all()
    }

    fn len(&self) -> tallykv_core::Result<usize> {
        Self::check(&self.fail_len, "DBSIZE")?;
        self.inner.len()
    }
}
