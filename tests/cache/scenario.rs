//! The canonical write/read/instrumentation walkthrough.

use crate::common::*;
use tallykv::prelude::*;

#[test]
fn reset_write_read_and_inspect() {
    let cache = fresh_cache();
    cache.reset().unwrap();

    let k1 = cache.write("foo").unwrap();

    assert_eq!(cache.read(k1.as_str(), Converter::Raw).unwrap(), Some(Value::from("foo")));
    assert_eq!(
        cache.read(k1.as_str(), Converter::AsText).unwrap(),
        Some(Value::from("foo"))
    );
    assert_eq!(cache.write_count().unwrap(), 1);

    let history = cache.write_history().unwrap();
    assert_eq!(history.inputs, vec!["(\"foo\",)"]);
    assert_eq!(history.outputs, vec![Value::from(k1.as_str())]);
}

#[test]
fn bytes_input_is_recorded_as_bytes_literal() {
    let cache = fresh_cache();
    cache.write(b"foo").unwrap();

    let history = cache.write_history().unwrap();
    assert_eq!(history.inputs, vec!["(b\"foo\",)"]);
}

#[test]
fn reset_clears_entries_counters_and_history() {
    let (cache, store) = cache_with_store();
    let key = cache.write("gone soon").unwrap();
    cache.write(2).unwrap();
    assert!(store.len().unwrap() > 0);

    cache.reset().unwrap();

    assert_eq!(cache.read_raw(key.as_str()).unwrap(), None);
    assert_eq!(cache.write_count().unwrap(), 0);
    assert!(cache.write_history().unwrap().is_empty());
    assert!(store.is_empty().unwrap());
}

#[test]
fn replay_reports_every_call() {
    let cache = fresh_cache();
    let k1 = cache.write("foo").unwrap();
    let k2 = cache.write(42).unwrap();

    let replay = cache.write_replay().unwrap();
    assert_eq!(replay.calls, 2);
    assert_eq!(
        replay.lines(),
        vec![
            "Cache.write was called 2 times:".to_string(),
            format!("Cache.write(*(\"foo\",)) -> {}", k1),
            format!("Cache.write(*(42,)) -> {}", k2),
        ]
    );
}

#[test]
fn two_caches_over_one_store_share_records() {
    let (first, store) = cache_with_store();
    first.write("a").unwrap();

    let second = Cache::builder()
        .reset_on_open(false)
        .open_with_store(store)
        .unwrap();
    second.write("b").unwrap();

    assert_eq!(first.write_count().unwrap(), 2);
    assert_eq!(second.write_history().unwrap().len(), 2);
}

#[test]
fn options_loaded_from_toml() {
    let options = CacheOptions::from_toml_str(
        r#"
        capacity = 64
        operation_prefix = "Sessions"
        "#,
    )
    .unwrap();

    let cache = Cache::builder().options(options).open().unwrap();
    cache.write("x").unwrap();

    let name = OperationName::new("Sessions.write");
    assert_eq!(cache.write_operation(), &name);
    assert_eq!(cache.call_count(&name).unwrap(), 1);
}
