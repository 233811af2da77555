//! `partcat-core` — shared catalog building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no output sinks).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;

pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use id::PartNumber;
pub use money::Price;
