// Integration tests for the hydration combinators.
// Covers order preservation, structural de-duplication, null-safety,
// field independence, and map key handling.

use std::cell::Cell;
use std::collections::BTreeMap;

use cortege_core::errors::Result;
use cortege_core::hydration::{
    CombinedHydrator, DateHydrator, Hydrator, ListHydrator, MapHydrator, OptionalHydrator,
    OrderedMapHydrator, PrimitiveHydrator, SetHydrator,
};

// ---------------------------------------------------------------------------
// ListHydrator
// ---------------------------------------------------------------------------

#[test]
fn test_list_preserves_order_of_distinct_elements() {
    let hydrator = ListHydrator::new(DateHydrator);
    let payload = vec![
        "2021-03-03".to_string(),
        "2020-01-01".to_string(),
        "2022-12-31".to_string(),
    ];

    let dates = hydrator.hydrate(payload.clone()).unwrap();
    assert_eq!(hydrator.dehydrate(&dates), payload);
}

#[test]
fn test_list_failure_produces_no_partial_result() {
    let hydrator = ListHydrator::new(DateHydrator);
    let payload = vec!["2020-01-01".to_string(), "not-a-date".to_string()];

    assert!(hydrator.hydrate(payload).is_err());
}

// ---------------------------------------------------------------------------
// SetHydrator
// ---------------------------------------------------------------------------

#[test]
fn test_set_collapses_structurally_equal_elements() {
    let hydrator = SetHydrator::new(DateHydrator);
    let payload = vec!["2020-01-01".to_string(), "2020-01-01".to_string()];

    let dates = hydrator.hydrate(payload).unwrap();
    assert_eq!(dates.len(), 1);
}

#[test]
fn test_set_keeps_distinct_elements() {
    let hydrator = SetHydrator::new(PrimitiveHydrator::<String>::new());
    let payload = vec!["a".to_string(), "b".to_string(), "a".to_string()];

    let set = hydrator.hydrate(payload).unwrap();
    assert_eq!(set.len(), 2);
}

// ---------------------------------------------------------------------------
// OptionalHydrator
// ---------------------------------------------------------------------------

/// Inner hydrator that records whether it was ever invoked
struct Instrumented<'a> {
    calls: &'a Cell<u32>,
}

impl Hydrator for Instrumented<'_> {
    type Domain = String;
    type Payload = String;

    fn hydrate(&self, payload: String) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        Ok(payload)
    }

    fn dehydrate(&self, value: &String) -> String {
        self.calls.set(self.calls.get() + 1);
        value.clone()
    }
}

#[test]
fn test_optional_none_skips_inner_entirely() {
    let calls = Cell::new(0);
    let hydrator = OptionalHydrator::new(Instrumented { calls: &calls });

    assert_eq!(hydrator.hydrate(None).unwrap(), None);
    assert_eq!(calls.get(), 0, "inner hydrator must not run for None");
}

#[test]
fn test_optional_some_empty_string_reaches_inner() {
    let calls = Cell::new(0);
    let hydrator = OptionalHydrator::new(Instrumented { calls: &calls });

    let out = hydrator.hydrate(Some(String::new())).unwrap();
    assert_eq!(out, Some(String::new()));
    assert_eq!(calls.get(), 1, "an empty string is present, not absent");
}

// ---------------------------------------------------------------------------
// CombinedHydrator
// ---------------------------------------------------------------------------

#[test]
fn test_combined_fields_are_independent() {
    let a = DateHydrator;
    let b = PrimitiveHydrator::<i64>::new();
    let combined = CombinedHydrator::new((DateHydrator, PrimitiveHydrator::<i64>::new()));

    let payload = ("2020-06-01".to_string(), 42);
    let (left, right) = combined.hydrate(payload.clone()).unwrap();

    assert_eq!(left, a.hydrate(payload.0).unwrap());
    assert_eq!(right, b.hydrate(payload.1).unwrap());
}

#[test]
fn test_combined_aborts_on_first_failing_field() {
    let combined = CombinedHydrator::new((DateHydrator, DateHydrator));
    let payload = ("bogus".to_string(), "2020-01-01".to_string());

    assert!(combined.hydrate(payload).is_err());
}

// ---------------------------------------------------------------------------
// MapHydrator
// ---------------------------------------------------------------------------

#[test]
fn test_map_single_entry_round_trip() {
    let hydrator: OrderedMapHydrator<PrimitiveHydrator<String>, PrimitiveHydrator<i64>> =
        MapHydrator::new(PrimitiveHydrator::new(), PrimitiveHydrator::new());

    let mut payload = BTreeMap::new();
    payload.insert("2020-01-01".to_string(), 5);

    let map = hydrator.hydrate(payload.clone()).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("2020-01-01"), Some(&5));
    assert_eq!(hydrator.dehydrate(&map), payload);
}

#[test]
fn test_map_keys_pass_through_key_hydrator() {
    // Date-keyed counts: the key string is decoded and hydrated, not
    // copied verbatim
    let hydrator: OrderedMapHydrator<DateHydrator, PrimitiveHydrator<i64>> =
        MapHydrator::new(DateHydrator, PrimitiveHydrator::new());

    let mut payload = BTreeMap::new();
    payload.insert("2020-01-01".to_string(), 3);
    payload.insert("2020-01-02".to_string(), 4);

    let map = hydrator.hydrate(payload.clone()).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(hydrator.dehydrate(&map), payload);
}

#[test]
fn test_map_rejects_colliding_keys() {
    let hydrator: OrderedMapHydrator<PrimitiveHydrator<String>, PrimitiveHydrator<i64>> =
        MapHydrator::new(PrimitiveHydrator::new(), PrimitiveHydrator::new());

    // A raw key and its JSON-quoted twin decode to the same domain key
    let mut payload = BTreeMap::new();
    payload.insert("k".to_string(), 1);
    payload.insert("\"k\"".to_string(), 2);

    let err = hydrator.hydrate(payload).unwrap_err();
    assert_eq!(err.code(), "ERR_DUPLICATE_KEY");
}

#[test]
fn test_map_bad_key_aborts_whole_read() {
    let hydrator: OrderedMapHydrator<DateHydrator, PrimitiveHydrator<i64>> =
        MapHydrator::new(DateHydrator, PrimitiveHydrator::new());

    let mut payload = BTreeMap::new();
    payload.insert("2020-01-01".to_string(), 1);
    payload.insert("never".to_string(), 2);

    assert!(hydrator.hydrate(payload).is_err());
}
