//! Entity model for Spot.
//!
//! Defines the record-side types every query path produces:
//! - [`Entity`] — the capability a mapped record must provide (field view,
//!   construction from fields, structural equality)
//! - [`Record`] — a generic entity backed by a JSON field map
//! - [`EntityCollection`] — an ordered, mergeable set of shared entities
//! - [`MergeMode`] — whether a merge collapses structural duplicates
//!
//! Mappers wrap query rows into entities and collect them here; connection
//! and type-handler management lives in `spot-config`.

mod collection;
mod entity;

pub use collection::{EntityCollection, MergeMode};
pub use entity::{Entity, FieldMap, Record};
