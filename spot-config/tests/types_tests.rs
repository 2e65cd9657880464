use serde_json::{Value, json};
use spot_config::TypeHandler;
use spot_config::types::{BooleanType, DatetimeType, FloatType, IntegerType, StringType};

// ── String ───────────────────────────────────────────────────────

#[test]
fn string_casts_scalars() {
    let h = StringType;
    assert_eq!(h.decode(&json!("abc")), json!("abc"));
    assert_eq!(h.decode(&json!(12)), json!("12"));
    assert_eq!(h.decode(&json!(true)), json!("1"));
    assert_eq!(h.decode(&json!(false)), json!(""));
    assert_eq!(h.decode(&Value::Null), Value::Null);
}

// ── Integer ──────────────────────────────────────────────────────

#[test]
fn integer_parses_and_truncates() {
    let h = IntegerType;
    assert_eq!(h.decode(&json!("42")), json!(42));
    assert_eq!(h.decode(&json!(" -7 ")), json!(-7));
    assert_eq!(h.decode(&json!(3.9)), json!(3));
    assert_eq!(h.decode(&json!("3.9")), json!(3));
    assert_eq!(h.decode(&json!(true)), json!(1));
}

#[test]
fn integer_unparsable_is_null() {
    let h = IntegerType;
    assert_eq!(h.decode(&json!("abc")), Value::Null);
    assert_eq!(h.decode(&json!([1])), Value::Null);
    assert_eq!(h.encode(&Value::Null), Value::Null);
}

// ── Float ────────────────────────────────────────────────────────

#[test]
fn float_parses_numbers_and_strings() {
    let h = FloatType;
    assert_eq!(h.decode(&json!("2.5")), json!(2.5));
    assert_eq!(h.decode(&json!(2)), json!(2.0));
    assert_eq!(h.decode(&json!(false)), json!(0.0));
    assert_eq!(h.decode(&json!("NaN")), Value::Null);
    assert_eq!(h.decode(&json!("x")), Value::Null);
}

// ── Boolean ──────────────────────────────────────────────────────

#[test]
fn boolean_follows_truthiness() {
    let h = BooleanType;
    for falsy in [json!(null), json!(0), json!(0.0), json!(""), json!("0"), json!([]), json!({})] {
        assert_eq!(h.decode(&falsy), json!(false), "{falsy}");
    }
    for truthy in [json!(1), json!("yes"), json!("false"), json!([0]), json!({"a": 1})] {
        assert_eq!(h.decode(&truthy), json!(true), "{truthy}");
    }
}

// ── Datetime ─────────────────────────────────────────────────────

#[test]
fn datetime_decodes_storage_format() {
    let h = DatetimeType;
    assert_eq!(h.decode(&json!("2024-03-01 12:30:00")), json!("2024-03-01T12:30:00Z"));
    assert_eq!(h.decode(&json!("2024-03-01")), json!("2024-03-01T00:00:00Z"));
    assert_eq!(h.decode(&json!("2024-03-01T14:30:00+02:00")), json!("2024-03-01T12:30:00Z"));
    assert_eq!(h.decode(&json!(86_400)), json!("1970-01-02T00:00:00Z"));
}

#[test]
fn datetime_encodes_storage_format() {
    let h = DatetimeType;
    assert_eq!(h.encode(&json!("2024-03-01T12:30:00Z")), json!("2024-03-01 12:30:00"));
    assert_eq!(h.encode(&json!("not a date")), Value::Null);
}

#[test]
fn handler_ids() {
    assert_eq!(StringType.id(), "string");
    assert_eq!(IntegerType.id(), "integer");
    assert_eq!(FloatType.id(), "float");
    assert_eq!(BooleanType.id(), "boolean");
    assert_eq!(DatetimeType.id(), "datetime");
}
