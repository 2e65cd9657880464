//! File-based mapper settings, read from TOML.
//!
//! ```toml
//! [types]
//! money = "decimal"
//! slug = "string"
//! ```

use crate::error::ConfigResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Settings applied to a [`crate::Config`] via [`crate::Config::apply_settings`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperSettings {
    /// Custom type name -> already registered type name whose handler it reuses.
    #[serde(default)]
    pub types: BTreeMap<String, String>,
}

impl MapperSettings {
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No mapper settings found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&contents)?;
        info!(aliases = settings.types.len(), "Loaded mapper settings from {:?}", path);
        Ok(settings)
    }
}
