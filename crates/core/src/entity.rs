//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Every record the integration layer loads carries a stable identifier; the
/// in-memory loader keys its tables on it and log lines report it.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
