//! `brewerp-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the shared error model, numeric identifiers and the ordered entity
//! collection both stores are built on.

pub mod collection;
pub mod entity;
pub mod error;
pub mod form;
pub mod id;
pub mod value_object;

pub use collection::EntityCollection;
pub use entity::{Entity, SequentialId};
pub use error::{DomainError, DomainResult};
pub use id::{InventoryItemId, RecipeId};
pub use value_object::ValueObject;
