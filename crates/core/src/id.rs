//! Catalog identifiers.

use core::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// Part number of a catalog product.
///
/// Unique by convention only. Comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartNumber(String);

impl PartNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PartNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PartNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PartNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for PartNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PartNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PartNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PartNumber {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
