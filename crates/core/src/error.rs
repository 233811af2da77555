//! Catalog error model.

use thiserror::Error;

use crate::id::PartNumber;

/// Result type used across the catalog crates.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Lookups that display their outcome never produce this; it exists for
/// callers that want absence as a propagated failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No product carries the requested part number.
    #[error("product not found: {0}")]
    NotFound(PartNumber),
}

impl CatalogError {
    pub fn not_found(part_number: impl Into<PartNumber>) -> Self {
        Self::NotFound(part_number.into())
    }
}
