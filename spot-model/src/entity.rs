use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field name to value map backing every entity.
///
/// `serde_json::Map` is ordered by key, so two maps holding the same pairs
/// compare equal regardless of the order fields were set in.
pub type FieldMap = serde_json::Map<String, Value>;

/// A mapped record as seen by collections and mappers.
///
/// Implementors expose their field values and are built from a field map by
/// the mapper during hydration. Structural equality compares field maps by
/// value; override [`Entity::same_fields`] only if some fields are transient.
pub trait Entity {
    /// The stable field-value view of this entity.
    fn fields(&self) -> &FieldMap;

    /// Builds an entity from a key/value initializer.
    fn from_fields(fields: FieldMap) -> Self
    where
        Self: Sized;

    /// Structural equality: true when both field maps are equal by value.
    fn same_fields(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.fields() == other.fields()
    }
}

/// A generic entity whose fields live in a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub data: FieldMap,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value of a top-level field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// Extract a string value from `data` using a JSON pointer (e.g., "/title").
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.pointer(pointer).and_then(|v| v.as_str())
    }

    /// Extract a boolean value from `data` using a JSON pointer.
    pub fn get_bool(&self, pointer: &str) -> Option<bool> {
        self.pointer(pointer).and_then(|v| v.as_bool())
    }

    /// Extract a numeric value from `data` using a JSON pointer.
    pub fn get_number(&self, pointer: &str) -> Option<f64> {
        self.pointer(pointer).and_then(|v| v.as_f64())
    }

    /// Sets a top-level field, returning the previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.data.insert(field.into(), value.into())
    }

    fn pointer(&self, pointer: &str) -> Option<&Value> {
        let rest = pointer.strip_prefix('/')?;
        let (head, tail) = match rest.find('/') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, ""),
        };
        let value = self.data.get(&head.replace("~1", "/").replace("~0", "~"))?;
        if tail.is_empty() {
            Some(value)
        } else {
            value.pointer(tail)
        }
    }
}

impl Entity for Record {
    fn fields(&self) -> &FieldMap {
        &self.data
    }

    fn from_fields(fields: FieldMap) -> Self {
        Self { data: fields }
    }
}

impl From<FieldMap> for Record {
    fn from(data: FieldMap) -> Self {
        Self { data }
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}
