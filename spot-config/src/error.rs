//! Error types for configuration operations.

use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while configuring connections and type handlers.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No handler is bound to the requested type name.
    #[error("type '{type_name}' not registered; register a handler for it before use")]
    UnregisteredType { type_name: String },

    /// A connection with this name is already bound.
    #[error("connection '{name}' already exists; connection names must be unique")]
    DuplicateConnection { name: String },

    /// Settings file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid TOML for [`crate::MapperSettings`].
    #[error("invalid settings: {0}")]
    Settings(#[from] toml::de::Error),
}

/// The kind of a [`ConfigError`], for callers that only need to branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    UnregisteredType,
    DuplicateConnection,
    Io,
    Settings,
}

impl ConfigError {
    pub fn kind(&self) -> ConfigErrorKind {
        match self {
            Self::UnregisteredType { .. } => ConfigErrorKind::UnregisteredType,
            Self::DuplicateConnection { .. } => ConfigErrorKind::DuplicateConnection,
            Self::Io(_) => ConfigErrorKind::Io,
            Self::Settings(_) => ConfigErrorKind::Settings,
        }
    }
}
