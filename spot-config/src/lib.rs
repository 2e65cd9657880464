//! Connection and type-handler registry for Spot.
//!
//! The mapper consults a [`Config`] for two things: which [`Adapter`] to run a
//! query against, and which [`TypeHandler`] coerces each field while rows are
//! hydrated into entities.
//!
//! A `Config` is an ordinary value that can be created and passed around
//! explicitly; [`Config::get_instance`] additionally offers one
//! process-wide instance for callers that want ambient access.

mod adapter;
mod config;
mod connections;
mod error;
mod registry;
mod settings;
pub mod types;

pub use adapter::Adapter;
pub use config::Config;
pub use connections::ConnectionRegistry;
pub use error::{ConfigError, ConfigErrorKind, ConfigResult};
pub use registry::TypeHandlerRegistry;
pub use settings::MapperSettings;
pub use types::TypeHandler;
