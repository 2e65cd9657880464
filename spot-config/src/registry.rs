use crate::error::{ConfigError, ConfigResult};
use crate::types::{self, TypeHandler};
use spot_model::FieldMap;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Maps type names to the coercion strategy used for fields of that type.
///
/// A fresh registry carries the built-in bindings. Registering an existing
/// name replaces its handler; resolving an unknown name is an error.
#[derive(Clone)]
pub struct TypeHandlerRegistry {
    handlers: HashMap<String, Arc<dyn TypeHandler>>,
}

impl TypeHandlerRegistry {
    pub fn new() -> Self {
        let handlers = types::builtin_bindings()
            .into_iter()
            .map(|(name, handler)| (name.to_string(), handler))
            .collect();
        Self { handlers }
    }

    /// A registry with no bindings at all.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Binds `type_name` to `handler`, replacing any previous binding.
    pub fn register(&mut self, type_name: impl Into<String>, handler: Arc<dyn TypeHandler>) {
        let type_name = type_name.into();
        debug!(type_name = %type_name, handler = handler.id(), "Registered type handler");
        self.handlers.insert(type_name, handler);
    }

    pub fn resolve(&self, type_name: &str) -> ConfigResult<Arc<dyn TypeHandler>> {
        self.handlers
            .get(type_name)
            .cloned()
            .ok_or_else(|| ConfigError::UnregisteredType {
                type_name: type_name.to_string(),
            })
    }

    /// Identifier of the handler bound to `type_name`.
    pub fn handler_id(&self, type_name: &str) -> ConfigResult<&'static str> {
        self.resolve(type_name).map(|handler| handler.id())
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.handlers.contains_key(type_name)
    }

    /// All bound type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Decodes a raw storage row into field values.
    ///
    /// Fields listed in `field_types` go through their type's handler; other
    /// fields are copied as-is. Every declared type is resolved before any
    /// value is touched, so an unknown type fails the whole row.
    pub fn hydrate(
        &self,
        field_types: &BTreeMap<String, String>,
        raw: FieldMap,
    ) -> ConfigResult<FieldMap> {
        let handlers = self.handlers_for(field_types)?;
        Ok(raw
            .into_iter()
            .map(|(field, value)| match handlers.get(field.as_str()) {
                Some(handler) => {
                    let decoded = handler.decode(&value);
                    (field, decoded)
                }
                None => (field, value),
            })
            .collect())
    }

    /// Encodes entity field values for storage; the inverse of [`Self::hydrate`].
    pub fn dehydrate(
        &self,
        field_types: &BTreeMap<String, String>,
        fields: &FieldMap,
    ) -> ConfigResult<FieldMap> {
        let handlers = self.handlers_for(field_types)?;
        Ok(fields
            .iter()
            .map(|(field, value)| {
                let stored = match handlers.get(field.as_str()) {
                    Some(handler) => handler.encode(value),
                    None => value.clone(),
                };
                (field.clone(), stored)
            })
            .collect())
    }

    fn handlers_for<'a>(
        &self,
        field_types: &'a BTreeMap<String, String>,
    ) -> ConfigResult<HashMap<&'a str, Arc<dyn TypeHandler>>> {
        field_types
            .iter()
            .map(|(field, type_name)| Ok((field.as_str(), self.resolve(type_name)?)))
            .collect()
    }
}

impl Default for TypeHandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypeHandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings: BTreeMap<&str, &str> = self
            .handlers
            .iter()
            .map(|(name, handler)| (name.as_str(), handler.id()))
            .collect();
        f.debug_struct("TypeHandlerRegistry")
            .field("handlers", &bindings)
            .finish()
    }
}
