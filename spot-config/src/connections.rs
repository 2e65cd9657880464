use crate::adapter::Adapter;
use crate::error::{ConfigError, ConfigResult};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Named adapters plus the name resolved when none is given.
///
/// Names are bound once. The first adapter added becomes the default; a later
/// add with `make_default` takes over, and the most recent such request wins.
#[derive(Default)]
pub struct ConnectionRegistry {
    connections: HashMap<String, Arc<dyn Adapter>>,
    order: Vec<String>,
    default_name: Option<String>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `adapter` under `name` and returns it.
    ///
    /// Fails with [`ConfigError::DuplicateConnection`] if `name` is already
    /// bound; the registry is left unchanged in that case.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        adapter: Arc<dyn Adapter>,
        make_default: bool,
    ) -> ConfigResult<Arc<dyn Adapter>> {
        let name = name.into();
        if self.connections.contains_key(&name) {
            warn!(connection = %name, "Rejected duplicate connection name");
            return Err(ConfigError::DuplicateConnection { name });
        }

        let is_default = make_default || self.default_name.is_none();
        if is_default {
            self.default_name = Some(name.clone());
        }

        info!(
            connection = %name,
            driver = adapter.driver_name(),
            is_default,
            "Connection added"
        );
        self.order.push(name.clone());
        self.connections.insert(name, Arc::clone(&adapter));
        Ok(adapter)
    }

    /// Looks up an adapter by name, or the default one when `name` is `None`.
    pub fn get(&self, name: Option<&str>) -> Option<Arc<dyn Adapter>> {
        let name = name.or(self.default_name.as_deref())?;
        self.connections.get(name).cloned()
    }

    pub fn default_connection(&self) -> Option<Arc<dyn Adapter>> {
        self.get(None)
    }

    pub fn default_name(&self) -> Option<&str> {
        self.default_name.as_deref()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.connections.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Connection names in the order they were added.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl fmt::Debug for ConnectionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let drivers: Vec<(&str, &str)> = self
            .order
            .iter()
            .filter_map(|name| {
                self.connections
                    .get(name)
                    .map(|adapter| (name.as_str(), adapter.driver_name()))
            })
            .collect();
        f.debug_struct("ConnectionRegistry")
            .field("connections", &drivers)
            .field("default_name", &self.default_name)
            .finish()
    }
}
