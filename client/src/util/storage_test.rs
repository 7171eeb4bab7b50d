use serde::Deserialize;

use super::*;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Sample {
    name: String,
    count: u32,
}

#[test]
fn memory_storage_set_get_remove() {
    let s = MemoryStorage::new();
    assert!(s.is_empty());
    s.set("k", "v");
    assert_eq!(s.get("k").as_deref(), Some("v"));
    s.set("k", "w");
    assert_eq!(s.get("k").as_deref(), Some("w"));
    assert_eq!(s.len(), 1);
    s.remove("k");
    assert_eq!(s.get("k"), None);
    s.remove("k");
    assert!(s.is_empty());
}

#[test]
fn json_helpers_round_trip_through_storage() {
    let s = MemoryStorage::new();
    let value = Sample { name: "ana".into(), count: 3 };
    save_json(&s, "sample", &value);
    assert_eq!(load_json::<Sample>(&s, "sample"), Some(value));
}

#[test]
fn load_json_ignores_malformed_values() {
    let s = MemoryStorage::new();
    s.set("sample", "{not json");
    assert_eq!(load_json::<Sample>(&s, "sample"), None);
    assert_eq!(load_json::<Sample>(&s, "missing"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_noop_outside_browser() {
    let s = LocalStorage;
    s.set(TOKEN_KEY, "abc");
    assert_eq!(s.get(TOKEN_KEY), None);
    s.remove(TOKEN_KEY);
}
