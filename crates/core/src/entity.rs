//! Entity trait: identity + continuity across the catalog.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Identifier the entity is looked up by.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
