//! Entity trait: identity + continuity across state changes.

/// Identifier that can be allocated sequentially by a store.
pub trait SequentialId: Copy + Ord + core::hash::Hash + core::fmt::Debug {
    /// True when the identifier has not been assigned yet.
    fn is_unassigned(&self) -> bool;

    /// The next identifier after the current maximum (`None` for an empty store).
    fn next_after(max: Option<&Self>) -> Self;
}

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: SequentialId;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Overwrites the identifier. Only stores call this, when allocating ids.
    fn assign_id(&mut self, id: Self::Id);
}
