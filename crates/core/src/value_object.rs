//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. A recipe ingredient line (`item 2, 150 ml`) or a computed
//! cost breakdown are value objects; an inventory item with an id is an entity.

/// Marker trait for value objects.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: helpful for logging and testing
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
