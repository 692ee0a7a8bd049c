//! Main cache entry point for TallyKV.
//!
//! This module provides the `Cache` struct: scalar writes under generated
//! keys, converted reads, and the counters and history kept for writes.

use crate::error::{Error, Result};
use crate::options::CacheOptions;
use std::sync::Arc;
use tallykv_core::{EntryKey, OperationName, Value};
use tallykv_instrument::convert::{to_int, to_text};
use tallykv_instrument::{
    call_count, CallHistory, Converter, CountCalls, FnOperation, History, Operation, Pipeline,
    Replay,
};
use tallykv_storage::{KvProtocol, MemoryStore};
use tracing::{info, trace, warn};

/// The cache.
///
/// Owns a handle to the key-value store it was opened over. Create one
/// with [`Cache::open`], [`Cache::ephemeral`] or [`Cache::builder`].
///
/// # Example
///
/// ```
/// use tallykv::prelude::*;
///
/// let cache = Cache::ephemeral()?;
///
/// let key = cache.write("foo")?;
/// assert_eq!(cache.read(key.as_str(), Converter::Raw)?, Some(Value::from("foo")));
/// assert_eq!(cache.read_text(key.as_str())?, Some("foo".to_string()));
/// assert_eq!(cache.write_count()?, 1);
/// # Ok::<(), tallykv::Error>(())
/// ```
pub struct Cache {
    /// The underlying store
    store: Arc<dyn KvProtocol>,

    /// Layers applied to instrumented operations, counting outermost
    pipeline: Pipeline,

    /// The write operation, already wrapped
    write_op: Arc<dyn Operation>,

    options: CacheOptions,
}

impl Cache {
    /// Open a cache over an existing store with default options.
    ///
    /// The store is flushed first; see [`CacheOptions::reset_on_open`].
    pub fn open(store: Arc<dyn KvProtocol>) -> Result<Self> {
        Self::builder().open_with_store(store)
    }

    /// Open a cache over a fresh embedded [`MemoryStore`].
    ///
    /// Nothing touches disk and all data is gone when the cache is dropped.
    pub fn ephemeral() -> Result<Self> {
        Self::builder().open()
    }

    /// Create a builder for cache configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use tallykv::Cache;
    ///
    /// let cache = Cache::builder()
    ///     .capacity(1024)
    ///     .operation_prefix("Sessions")
    ///     .open()?;
    /// assert_eq!(cache.write_operation().as_str(), "Sessions.write");
    /// # Ok::<(), tallykv::Error>(())
    /// ```
    pub fn builder() -> CacheBuilder {
        CacheBuilder::new()
    }

    fn with_store(store: Arc<dyn KvProtocol>, options: CacheOptions) -> Result<Self> {
        options.validate()?;

        let pipeline = Pipeline::new()
            .layer(CountCalls::new(Arc::clone(&store)))
            .layer(CallHistory::new(Arc::clone(&store)));

        let write_name = OperationName::qualified(&options.operation_prefix, "write");
        let write_op = pipeline.build(write_operation(write_name, Arc::clone(&store)));

        let cache = Self {
            store,
            pipeline,
            write_op,
            options,
        };
        if cache.options.reset_on_open {
            cache.reset()?;
        }
        info!("Opened cache ({})", cache.write_op.name());
        Ok(cache)
    }

    // =========================================================================
    // Store API
    // =========================================================================

    /// Remove every entry, counter and history list from the store.
    ///
    /// Irreversible. This flushes the whole store, including keys the cache
    /// did not write.
    pub fn reset(&self) -> Result<()> {
        self.store.flush_all()?;
        info!("Cache reset");
        Ok(())
    }

    /// Store a value under a freshly generated key and return the key.
    ///
    /// Counts the call and records it in the write history.
    ///
    /// Accepts any type that implements `Into<Value>`:
    /// - `&str`, `String` → `Value::String`
    /// - `&[u8]`, `Vec<u8>` → `Value::Bytes`
    /// - `i32`, `i64`, `u32` → `Value::Int`
    /// - `f32`, `f64` → `Value::Float`
    pub fn write(&self, value: impl Into<Value>) -> Result<EntryKey> {
        match self.write_op.call(&[value.into()])? {
            Value::String(key) => Ok(EntryKey::from(key)),
            other => Err(Error::Internal(format!(
                "unexpected output for {}: {}",
                self.write_op.name(),
                other.type_name()
            ))),
        }
    }

    /// Read a value, converting it as requested.
    ///
    /// Returns `None` if the key doesn't exist. Conversion failures are
    /// returned as [`Error::Conversion`].
    pub fn read(&self, key: &str, converter: Converter) -> Result<Option<Value>> {
        trace!("read {} ({:?})", key, converter);
        match self.store.get(key)? {
            None => Ok(None),
            Some(value) => Ok(Some(converter.apply(value)?)),
        }
    }

    /// Read a value exactly as it was written.
    pub fn read_raw(&self, key: &str) -> Result<Option<Value>> {
        self.read(key, Converter::Raw)
    }

    /// Read a value as UTF-8 text.
    pub fn read_text(&self, key: &str) -> Result<Option<String>> {
        self.read_with(key, to_text)
    }

    /// Read a value as a base-10 integer.
    pub fn read_int(&self, key: &str) -> Result<Option<i64>> {
        self.read_with(key, |value| to_int(&value))
    }

    /// Read a value through a typed conversion.
    ///
    /// # Example
    ///
    /// ```
    /// use tallykv::prelude::*;
    ///
    /// let cache = Cache::ephemeral()?;
    /// let key = cache.write(b"a,b,c".to_vec())?;
    /// let parts = cache.read_with(key.as_str(), |v| {
    ///     let bytes = v.as_bytes().unwrap_or_default().to_vec();
    ///     Ok::<_, Error>(bytes.split(|b| *b == b',').count())
    /// })?;
    /// assert_eq!(parts, Some(3));
    /// # Ok::<(), tallykv::Error>(())
    /// ```
    pub fn read_with<T, E, F>(&self, key: &str, f: F) -> Result<Option<T>>
    where
        F: FnOnce(Value) -> std::result::Result<T, E>,
        E: Into<Error>,
    {
        match self.store.get(key)? {
            None => Ok(None),
            Some(value) => f(value).map(Some).map_err(Into::into),
        }
    }

    // =========================================================================
    // Instrumentation
    // =========================================================================

    /// Wrap an operation with the cache's counting and history layers.
    ///
    /// The returned operation records into the same store as
    /// [`Cache::write`], under its own name.
    pub fn instrument(&self, op: Arc<dyn Operation>) -> Arc<dyn Operation> {
        self.pipeline.build(op)
    }

    /// Name of the instrumented write operation (`Cache.write` by default).
    pub fn write_operation(&self) -> &OperationName {
        self.write_op.name()
    }

    /// Number of times `name` has been called since the last reset.
    pub fn call_count(&self, name: &OperationName) -> Result<i64> {
        Ok(call_count(self.store.as_ref(), name)?)
    }

    /// Recorded inputs and outputs of `name`.
    pub fn history(&self, name: &OperationName) -> Result<History> {
        Ok(History::load(self.store.as_ref(), name)?)
    }

    /// Counter and history of `name` as a printable report.
    pub fn replay(&self, name: &OperationName) -> Result<Replay> {
        let replay = Replay::load(self.store.as_ref(), name)?;
        for line in replay.lines() {
            info!("{}", line);
        }
        Ok(replay)
    }

    /// Number of writes since the last reset.
    pub fn write_count(&self) -> Result<i64> {
        self.call_count(self.write_op.name())
    }

    /// Recorded inputs and outputs of [`Cache::write`].
    pub fn write_history(&self) -> Result<History> {
        self.history(self.write_op.name())
    }

    /// Replay of [`Cache::write`].
    pub fn write_replay(&self) -> Result<Replay> {
        self.replay(self.write_op.name())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// The store this cache was opened over.
    pub fn store(&self) -> &Arc<dyn KvProtocol> {
        &self.store
    }

    /// Options the cache was opened with.
    pub fn options(&self) -> &CacheOptions {
        &self.options
    }

    /// Close the cache.
    ///
    /// Releases the cache's handle on the store. Data stays in the store
    /// for as long as other handles keep it alive.
    pub fn close(self) -> Result<()> {
        match self.store.len() {
            Ok(keys) => info!("Closing cache ({} keys in store)", keys),
            Err(e) => warn!("Closing cache (store size unavailable: {})", e),
        }
        Ok(())
    }
}

/// The un-instrumented write: generate a key, SET the value, return the key.
fn write_operation(name: OperationName, store: Arc<dyn KvProtocol>) -> Arc<dyn Operation> {
    Arc::new(FnOperation::new(name, move |args: &[Value]| {
        let [value] = args else {
            return Err(tallykv_core::Error::Internal(format!(
                "write takes 1 argument, got {}",
                args.len()
            )));
        };
        let key = EntryKey::generate();
        store.set(key.as_str(), value.clone())?;
        trace!("wrote {} ({})", key, value.type_name());
        Ok(Value::String(key.into_string()))
    }))
}

/// Builder for cache configuration.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tallykv::{Cache, KvProtocol, MemoryStore};
///
/// let store: Arc<dyn KvProtocol> = Arc::new(MemoryStore::new());
/// store.set("greeting", "hello".into())?;
///
/// let cache = Cache::builder()
///     .reset_on_open(false)
///     .open_with_store(Arc::clone(&store))?;
/// assert_eq!(cache.read_text("greeting")?, Some("hello".to_string()));
/// # Ok::<(), tallykv::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CacheBuilder {
    options: CacheOptions,
}

impl CacheBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all options at once.
    pub fn options(mut self, options: CacheOptions) -> Self {
        self.options = options;
        self
    }

    /// Whether to flush the store on open.
    pub fn reset_on_open(mut self, reset: bool) -> Self {
        self.options.reset_on_open = reset;
        self
    }

    /// Expected number of keys for the embedded store.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.options.capacity = capacity;
        self
    }

    /// Qualifier for instrumented operation names.
    pub fn operation_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.operation_prefix = prefix.into();
        self
    }

    /// Open over a new embedded [`MemoryStore`].
    pub fn open(self) -> Result<Cache> {
        let store = Arc::new(MemoryStore::with_capacity(self.options.capacity));
        Cache::with_store(store, self.options)
    }

    /// Open over an existing store.
    pub fn open_with_store(self, store: Arc<dyn KvProtocol>) -> Result<Cache> {
        Cache::with_store(store, self.options)
    }
}
