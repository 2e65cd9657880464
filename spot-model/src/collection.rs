//! Ordered collections of mapped entities.
//!
//! Entities are held behind `Arc` so the same record can sit in several
//! collections at once; `first`, `get`, `filter` and iteration hand back the
//! shared handles rather than copies.

use crate::entity::{Entity, FieldMap};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// How [`EntityCollection::merge`] treats structurally equal entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeMode {
    /// Skip any incoming entity whose fields equal an entity already present.
    #[default]
    Unique,
    /// Append every incoming entity.
    All,
}

impl From<bool> for MergeMode {
    fn from(unique: bool) -> Self {
        if unique { Self::Unique } else { Self::All }
    }
}

/// An insertion-ordered sequence of entities.
pub struct EntityCollection<E> {
    entities: Vec<Arc<E>>,
}

impl<E> EntityCollection<E> {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Builds a collection from an ordered sequence of entities.
    pub fn from_entities(entities: impl IntoIterator<Item = E>) -> Self {
        entities.into_iter().collect()
    }

    /// Builds a collection from entities already shared elsewhere.
    pub fn from_shared(entities: impl IntoIterator<Item = Arc<E>>) -> Self {
        Self {
            entities: entities.into_iter().collect(),
        }
    }

    /// Appends an entity. Duplicates are kept.
    pub fn add(&mut self, entity: E) -> &mut Self {
        self.add_shared(Arc::new(entity))
    }

    /// Appends an entity that may also live in other collections.
    pub fn add_shared(&mut self, entity: Arc<E>) -> &mut Self {
        self.entities.push(entity);
        self
    }

    pub fn count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The first entity in insertion order.
    pub fn first(&self) -> Option<&Arc<E>> {
        self.entities.first()
    }

    /// Positional access; `None` when `index` is out of range.
    pub fn get(&self, index: usize) -> Option<&Arc<E>> {
        self.entities.get(index)
    }

    /// Removes and returns the entity at `index`, shifting later entities down.
    pub fn remove(&mut self, index: usize) -> Option<Arc<E>> {
        (index < self.entities.len()).then(|| self.entities.remove(index))
    }

    /// Iterates the current entities in insertion order. Each call starts
    /// from the first entity.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<E>> {
        self.entities.iter()
    }

    /// Applies `f` to every entity in order and collects the results.
    pub fn map<T, F>(&self, f: F) -> Vec<T>
    where
        F: FnMut(&Arc<E>) -> T,
    {
        self.entities.iter().map(f).collect()
    }

    /// Returns a new collection holding the entities for which `predicate`
    /// is true, in their original order. The source is left untouched.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&E) -> bool,
    {
        Self {
            entities: self
                .entities
                .iter()
                .filter(|entity| predicate(entity))
                .cloned()
                .collect(),
        }
    }

    pub fn into_vec(self) -> Vec<Arc<E>> {
        self.entities
    }
}

impl<E: Entity> EntityCollection<E> {
    /// Merges `other` into this collection and returns `self` for chaining.
    ///
    /// With [`MergeMode::Unique`] an incoming entity is appended only when no
    /// entity already in the (growing) result has the same fields, so
    /// duplicates inside `other` collapse too. [`MergeMode::All`] appends
    /// everything. `other` is not modified.
    pub fn merge(&mut self, other: &EntityCollection<E>, mode: MergeMode) -> &mut Self {
        let before = self.entities.len();
        for candidate in &other.entities {
            let duplicate = mode == MergeMode::Unique
                && self
                    .entities
                    .iter()
                    .any(|existing| existing.same_fields(candidate));
            if !duplicate {
                self.entities.push(Arc::clone(candidate));
            }
        }

        let appended = self.entities.len() - before;
        debug!(
            ?mode,
            appended,
            skipped = other.entities.len() - appended,
            "Merged entity collection"
        );
        self
    }

    /// Field maps of every entity, in order.
    pub fn to_rows(&self) -> Vec<FieldMap> {
        self.entities.iter().map(|e| e.fields().clone()).collect()
    }

    /// The value of `field` for every entity, `Null` where it is missing.
    pub fn column(&self, field: &str) -> Vec<Value> {
        self.entities
            .iter()
            .map(|e| e.fields().get(field).cloned().unwrap_or(Value::Null))
            .collect()
    }

    /// Maps each entity's `key_field` to its `value_field`.
    ///
    /// String keys are used as-is, other values by their JSON text; entities
    /// missing the key field are skipped. Later entities overwrite earlier ones.
    pub fn key_value(&self, key_field: &str, value_field: &str) -> FieldMap {
        let mut out = FieldMap::new();
        for entity in &self.entities {
            let fields = entity.fields();
            let Some(key) = fields.get(key_field) else {
                continue;
            };
            let key = match key {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let value = fields.get(value_field).cloned().unwrap_or(Value::Null);
            out.insert(key, value);
        }
        out
    }
}

impl<E> Default for EntityCollection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EntityCollection<E> {
    fn clone(&self) -> Self {
        Self {
            entities: self.entities.clone(),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for EntityCollection<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entities.iter()).finish()
    }
}

impl<E> fmt::Display for EntityCollection<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityCollection[{}]", self.entities.len())
    }
}

impl<E> From<Vec<E>> for EntityCollection<E> {
    fn from(entities: Vec<E>) -> Self {
        entities.into_iter().collect()
    }
}

impl<E> FromIterator<E> for EntityCollection<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl<E> Extend<Arc<E>> for EntityCollection<E> {
    fn extend<I: IntoIterator<Item = Arc<E>>>(&mut self, iter: I) {
        self.entities.extend(iter);
    }
}

impl<'a, E> IntoIterator for &'a EntityCollection<E> {
    type Item = &'a Arc<E>;
    type IntoIter = std::slice::Iter<'a, Arc<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

impl<E> IntoIterator for EntityCollection<E> {
    type Item = Arc<E>;
    type IntoIter = std::vec::IntoIter<Arc<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.into_iter()
    }
}
