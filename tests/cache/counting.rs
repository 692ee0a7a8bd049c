//! The write counter.

use crate::common::*;
use proptest::prelude::*;
use std::sync::Arc;
use tallykv::prelude::*;
use tallykv::FnOperation;

#[test]
fn counter_is_zero_after_reset() {
    let cache = fresh_cache();
    assert_eq!(cache.write_count().unwrap(), 0);
}

#[test]
fn counter_advances_from_previous_value() {
    let cache = fresh_cache();
    for _ in 0..3 {
        cache.write("x").unwrap();
    }
    let before = cache.write_count().unwrap();

    for _ in 0..4 {
        cache.write("y").unwrap();
    }
    assert_eq!(cache.write_count().unwrap(), before + 4);
}

#[test]
fn counter_below_zero_advances_by_one_per_write() {
    let (_, store) = cache_with_store();
    store.set("Cache.write", Value::Int(-3)).unwrap();
    let cache = Cache::builder()
        .reset_on_open(false)
        .open_with_store(Arc::clone(&store))
        .unwrap();

    let before = cache.write_count().unwrap();
    cache.write("a").unwrap();
    cache.write("b").unwrap();

    assert_eq!(before, -3);
    assert_eq!(cache.write_count().unwrap() - before, 2);
    assert_eq!(cache.write_replay().unwrap().calls, -1);
}

#[test]
fn reads_are_not_counted() {
    let cache = fresh_cache();
    let key = cache.write("x").unwrap();
    for _ in 0..5 {
        cache.read_raw(key.as_str()).unwrap();
    }
    assert_eq!(cache.write_count().unwrap(), 1);
}

#[test]
fn instrumented_operation_has_its_own_counter() {
    let cache = fresh_cache();
    let name = OperationName::qualified("Cache", "lookup");
    let lookup = cache.instrument(Arc::new(FnOperation::new(name.clone(), |args: &[Value]| {
        Ok(Value::Int(args.len() as i64))
    })));

    lookup.call(&[Value::from("a")]).unwrap();
    lookup.call(&[Value::from("b")]).unwrap();
    cache.write("c").unwrap();

    assert_eq!(cache.call_count(&name).unwrap(), 2);
    assert_eq!(cache.write_count().unwrap(), 1);
    assert_eq!(cache.history(&name).unwrap().outputs, vec![Value::Int(1), Value::Int(1)]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn n_writes_count_n(n in 0i64..50) {
        let cache = Cache::ephemeral().unwrap();
        for i in 0..n {
            cache.write(i).unwrap();
        }
        prop_assert_eq!(cache.write_count().unwrap(), n);
    }
}
