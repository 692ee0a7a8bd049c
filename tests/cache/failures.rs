//! Store failures propagate unchanged and are never retried.

use crate::common::*;
use std::sync::Arc;
use tallykv::prelude::*;

fn flaky_cache() -> (Cache, Arc<FlakyStore>) {
    init_tracing();
    let store = Arc::new(FlakyStore::new());
    let cache = Cache::open(store.clone()).unwrap();
    (cache, store)
}

#[test]
fn failed_set_propagates_and_records_input_only() {
    let (cache, store) = flaky_cache();
    store.fail_set(true);

    let err = cache.write("lost").unwrap_err();
    assert!(err.is_storage(), "{}", err);

    store.fail_set(false);
    let history = cache.write_history().unwrap();
    assert_eq!(history.inputs, vec!["(\"lost\",)"]);
    assert!(history.outputs.is_empty());
    // the counter runs before the write
    assert_eq!(cache.write_count().unwrap(), 1);
}

#[test]
fn failed_incr_stops_the_call() {
    let (cache, store) = flaky_cache();
    store.fail_incr(true);

    assert!(cache.write("never").unwrap_err().is_storage());
    assert!(cache.write_history().unwrap().is_empty());
    assert_eq!(store.len().unwrap(), 0);
}

#[test]
fn failed_get_propagates_from_read() {
    let (cache, store) = flaky_cache();
    let key = cache.write("kept").unwrap();
    store.fail_get(true);

    assert!(cache.read_raw(key.as_str()).unwrap_err().is_storage());

    store.fail_get(false);
    assert_eq!(cache.read_raw(key.as_str()).unwrap(), Some(Value::from("kept")));
}

#[test]
fn close_succeeds_when_store_size_is_unavailable() {
    let (cache, store) = flaky_cache();
    cache.write("kept").unwrap();
    store.fail_len(true);

    assert!(cache.close().is_ok());
}
