use pretty_assertions::assert_eq;
use serde_json::json;
use spot_model::{Entity, FieldMap, Record};

fn record(data: serde_json::Value) -> Record {
    match data {
        serde_json::Value::Object(map) => Record::from_fields(map),
        other => panic!("expected object, got {other}"),
    }
}

// ── Construction ─────────────────────────────────────────────────

#[test]
fn new_record_has_no_fields() {
    let r = Record::new();
    assert!(r.fields().is_empty());
}

#[test]
fn from_fields_keeps_initializer() {
    let r = record(json!({"title": "Hello", "count": 3}));
    assert_eq!(r.get("title"), Some(&json!("Hello")));
    assert_eq!(r.get("count"), Some(&json!(3)));
}

#[test]
fn collect_from_pairs() {
    let r: Record = vec![("key".to_string(), json!("value"))].into_iter().collect();
    assert_eq!(r.get_str("/key"), Some("value"));
}

#[test]
fn set_returns_previous_value() {
    let mut r = record(json!({"key": "old"}));
    assert_eq!(r.set("key", "new"), Some(json!("old")));
    assert_eq!(r.set("other", 1), None);
    assert_eq!(r.get_str("/key"), Some("new"));
}

// ── Pointer helpers ──────────────────────────────────────────────

#[test]
fn get_str_with_nested_path() {
    let r = record(json!({"meta": {"author": "Alice"}}));
    assert_eq!(r.get_str("/meta/author"), Some("Alice"));
}

#[test]
fn typed_getters_reject_wrong_types() {
    let r = record(json!({"title": "x", "done": true, "price": 1.5}));
    assert_eq!(r.get_bool("/title"), None);
    assert_eq!(r.get_number("/done"), None);
    assert_eq!(r.get_str("/price"), None);
    assert_eq!(r.get_bool("/done"), Some(true));
    assert_eq!(r.get_number("/price"), Some(1.5));
}

#[test]
fn pointer_without_leading_slash_is_none() {
    let r = record(json!({"title": "x"}));
    assert_eq!(r.get_str("title"), None);
    assert_eq!(r.get_str(""), None);
}

#[test]
fn pointer_unescapes_slash_in_field_name() {
    let r = record(json!({"a/b": "slashed"}));
    assert_eq!(r.get_str("/a~1b"), Some("slashed"));
}

// ── Structural equality ──────────────────────────────────────────

#[test]
fn same_fields_ignores_insertion_order() {
    let mut a = Record::new();
    a.set("x", 1);
    a.set("y", 2);
    let mut b = Record::new();
    b.set("y", 2);
    b.set("x", 1);
    assert!(a.same_fields(&b));
}

#[test]
fn same_fields_compares_values() {
    let a = record(json!({"foo": "bar"}));
    let b = record(json!({"foo": "baz"}));
    let empty = Record::from_fields(FieldMap::new());
    assert!(!a.same_fields(&b));
    assert!(!a.same_fields(&empty));
    assert!(empty.same_fields(&Record::new()));
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn deserialize_from_known_json() {
    let r: Record = serde_json::from_str(r#"{"data": {"done": false}}"#).unwrap();
    assert_eq!(r.get_bool("/done"), Some(false));
}
