//! In-memory inventory store.

use serde::Serialize;

use brewerp_core::{DomainResult, EntityCollection, InventoryItemId};

use crate::item::InventoryItem;

/// Items shown per page on the inventory listing.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Ordered collection of inventory items, exclusively owned by the workspace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryStore {
    items: EntityCollection<InventoryItem>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from persisted or seeded records.
    pub fn from_items(items: Vec<InventoryItem>) -> DomainResult<Self> {
        for item in &items {
            item.validate()?;
        }
        Ok(Self {
            items: EntityCollection::from_vec(items)?,
        })
    }

    pub fn list(&self) -> &[InventoryItem] {
        self.items.list()
    }

    pub fn get(&self, id: InventoryItemId) -> Option<&InventoryItem> {
        self.items.get(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item, allocating a fresh id when it has none.
    pub fn add(&mut self, item: InventoryItem) -> DomainResult<InventoryItem> {
        item.validate()?;
        let stored = self.items.add(item)?;
        tracing::debug!(item_id = %stored.id, name = %stored.name, "inventory item added");
        Ok(stored)
    }

    /// Replace the item with the same id. Returns `Ok(false)` when no item
    /// matched, in which case nothing changes.
    pub fn update(&mut self, item: InventoryItem) -> DomainResult<bool> {
        item.validate()?;
        let id = item.id;
        let matched = self.items.update(item);
        if !matched {
            tracing::debug!(item_id = %id, "inventory update ignored: no such item");
        }
        Ok(matched)
    }

    /// Remove the item with the given id. Recipes referencing it are left
    /// untouched.
    pub fn delete(&mut self, id: InventoryItemId) -> Option<InventoryItem> {
        let removed = self.items.delete(&id);
        if removed.is_none() {
            tracing::debug!(item_id = %id, "inventory delete ignored: no such item");
        }
        removed
    }

    /// Replace the whole inventory.
    pub fn replace_all(&mut self, items: Vec<InventoryItem>) -> DomainResult<()> {
        *self = Self::from_items(items)?;
        Ok(())
    }

    /// Items whose name contains `query`, case-insensitively, in store order.
    /// An empty query matches everything. Whitespace in the query is
    /// significant.
    pub fn search(&self, query: &str) -> Vec<&InventoryItem> {
        let needle = query.to_lowercase();
        self.list()
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect()
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number that was requested.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slice `items` into 1-based pages of `per_page` entries.
///
/// Page `0` is read as page 1 and a `per_page` of `0` falls back to
/// [`DEFAULT_PAGE_SIZE`]. Pages past the end are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let page = page.max(1);
    let per_page = if per_page == 0 { DEFAULT_PAGE_SIZE } else { per_page };
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page).min(total_items);
    let end = start.saturating_add(per_page).min(total_items);

    Page {
        items: items[start..end].to_vec(),
        page,
        total_pages,
        total_items,
    }
}
