//! Ordered, id-addressed entity collection.
//!
//! Both the inventory and the recipe store are thin wrappers over this type.
//! Insertion order is preserved (it is the display order), identifiers are
//! unique within the collection, and `update`/`delete` on a missing id are
//! no-ops rather than errors.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, SequentialId};
use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityCollection<T> {
    items: Vec<T>,
}

impl<T> Default for EntityCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> EntityCollection<T>
where
    T: Entity + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from existing records (rehydration / seeding).
    ///
    /// Records without an id get one allocated; duplicate ids are rejected.
    pub fn from_vec(items: Vec<T>) -> DomainResult<Self> {
        let mut collection = Self::new();
        for item in items {
            collection.add(item)?;
        }
        Ok(collection)
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Next identifier the collection would hand out.
    pub fn next_id(&self) -> T::Id {
        T::Id::next_after(self.items.iter().map(Entity::id).max())
    }

    /// Append a record, allocating an id when it has none.
    ///
    /// Returns the stored record (with its final id).
    pub fn add(&mut self, mut item: T) -> DomainResult<T> {
        if item.id().is_unassigned() {
            item.assign_id(self.next_id());
        } else if self.contains(item.id()) {
            return Err(DomainError::conflict(format!(
                "id {:?} is already in use",
                item.id()
            )));
        }

        self.items.push(item.clone());
        Ok(item)
    }

    /// Replace the record with a matching id in place.
    ///
    /// Returns `false` (and changes nothing) when no record matches.
    pub fn update(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Remove the record with a matching id.
    ///
    /// Returns the removed record, or `None` when nothing matched.
    pub fn delete(&mut self, id: &T::Id) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }
}
