//! Field coercion strategies.
//!
//! A [`TypeHandler`] converts between the value stored by an adapter and the
//! value carried on an entity field. Coercion is lenient: input a handler
//! cannot interpret becomes `Null` instead of failing the whole row.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::{Number, Value};
use std::sync::Arc;

pub const STRING: &str = "string";
pub const INTEGER: &str = "integer";
pub const FLOAT: &str = "float";
pub const BOOLEAN: &str = "boolean";
pub const DATETIME: &str = "datetime";

/// Storage format written by [`DatetimeType::encode`].
pub const STORAGE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A coercion strategy bound to one or more type names.
pub trait TypeHandler: Send + Sync {
    /// Identifier naming this strategy (e.g. "integer").
    fn id(&self) -> &'static str;

    /// Converts a raw storage value into a field value.
    fn decode(&self, raw: &Value) -> Value;

    /// Converts a field value into its storage representation.
    /// Defaults to the same coercion as [`TypeHandler::decode`].
    fn encode(&self, value: &Value) -> Value {
        self.decode(value)
    }
}

/// Built-in bindings installed into every fresh registry.
pub fn builtin_bindings() -> Vec<(&'static str, Arc<dyn TypeHandler>)> {
    let string: Arc<dyn TypeHandler> = Arc::new(StringType);
    let integer: Arc<dyn TypeHandler> = Arc::new(IntegerType);
    let float: Arc<dyn TypeHandler> = Arc::new(FloatType);
    let boolean: Arc<dyn TypeHandler> = Arc::new(BooleanType);
    let datetime: Arc<dyn TypeHandler> = Arc::new(DatetimeType);

    vec![
        ("string", Arc::clone(&string)),
        ("text", string),
        ("int", Arc::clone(&integer)),
        ("integer", Arc::clone(&integer)),
        ("float", Arc::clone(&float)),
        ("double", Arc::clone(&float)),
        ("decimal", float),
        ("bool", Arc::clone(&boolean)),
        ("boolean", boolean),
        ("datetime", Arc::clone(&datetime)),
        ("date", datetime),
        ("timestamp", Arc::clone(&integer)),
        ("year", Arc::clone(&integer)),
        ("month", Arc::clone(&integer)),
        ("day", integer),
    ]
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StringType;

impl TypeHandler for StringType {
    fn id(&self) -> &'static str {
        STRING
    }

    fn decode(&self, raw: &Value) -> Value {
        match raw {
            Value::Null => Value::Null,
            Value::String(_) => raw.clone(),
            Value::Bool(true) => Value::String("1".into()),
            Value::Bool(false) => Value::String(String::new()),
            other => Value::String(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerType;

impl TypeHandler for IntegerType {
    fn id(&self) -> &'static str {
        INTEGER
    }

    fn decode(&self, raw: &Value) -> Value {
        let int = match raw {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(truncate))
            }
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        };
        int.map_or(Value::Null, Value::from)
    }
}

fn truncate(f: f64) -> Option<i64> {
    (f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64).then(|| f.trunc() as i64)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FloatType;

impl TypeHandler for FloatType {
    fn id(&self) -> &'static str {
        FLOAT
    }

    fn decode(&self, raw: &Value) -> Value {
        let float = match raw {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        };
        float
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanType;

impl TypeHandler for BooleanType {
    fn id(&self) -> &'static str {
        BOOLEAN
    }

    fn decode(&self, raw: &Value) -> Value {
        let truthy = match raw {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !(s.is_empty() || s == "0"),
            Value::Array(items) => !items.is_empty(),
            Value::Object(fields) => !fields.is_empty(),
        };
        Value::Bool(truthy)
    }
}

/// Datetimes travel as RFC 3339 UTC strings on entities and as
/// `YYYY-MM-DD HH:MM:SS` in storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatetimeType;

impl DatetimeType {
    /// Parses RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD` or unix seconds.
    pub fn parse(raw: &Value) -> Option<DateTime<Utc>> {
        match raw {
            Value::Number(n) => DateTime::from_timestamp(n.as_i64()?, 0),
            Value::String(s) => {
                let s = s.trim();
                if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                    return Some(dt.with_timezone(&Utc));
                }
                if let Ok(naive) = NaiveDateTime::parse_from_str(s, STORAGE_DATETIME_FORMAT) {
                    return Some(naive.and_utc());
                }
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()?
                    .and_hms_opt(0, 0, 0)
                    .map(|naive| naive.and_utc())
            }
            _ => None,
        }
    }
}

impl TypeHandler for DatetimeType {
    fn id(&self) -> &'static str {
        DATETIME
    }

    fn decode(&self, raw: &Value) -> Value {
        Self::parse(raw).map_or(Value::Null, |dt| {
            Value::String(dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        })
    }

    fn encode(&self, value: &Value) -> Value {
        Self::parse(value).map_or(Value::Null, |dt| {
            Value::String(dt.format(STORAGE_DATETIME_FORMAT).to_string())
        })
    }
}
