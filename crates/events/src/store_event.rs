//! Notifications emitted by the workspace after each mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use brewerp_core::{InventoryItemId, RecipeId};

use crate::event::Event;

/// What changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEventKind {
    InventoryItemAdded { item_id: InventoryItemId, name: String },
    InventoryItemUpdated { item_id: InventoryItemId },
    InventoryItemDeleted { item_id: InventoryItemId },
    InventoryReplaced { count: usize },
    RecipeAdded { recipe_id: RecipeId, name: String },
    RecipeUpdated { recipe_id: RecipeId },
    RecipeDeleted { recipe_id: RecipeId },
    SignedIn { email: String },
    SignedOut,
    StateReset,
}

/// A state change, stamped with the time it was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreEvent {
    pub kind: StoreEventKind,
    pub occurred_at: DateTime<Utc>,
}

impl StoreEvent {
    pub fn new(kind: StoreEventKind, occurred_at: DateTime<Utc>) -> Self {
        Self { kind, occurred_at }
    }

    pub fn now(kind: StoreEventKind) -> Self {
        Self::new(kind, Utc::now())
    }
}

impl Event for StoreEvent {
    fn event_type(&self) -> &'static str {
        match self.kind {
            StoreEventKind::InventoryItemAdded { .. } => "inventory.item.added",
            StoreEventKind::InventoryItemUpdated { .. } => "inventory.item.updated",
            StoreEventKind::InventoryItemDeleted { .. } => "inventory.item.deleted",
            StoreEventKind::InventoryReplaced { .. } => "inventory.replaced",
            StoreEventKind::RecipeAdded { .. } => "recipes.recipe.added",
            StoreEventKind::RecipeUpdated { .. } => "recipes.recipe.updated",
            StoreEventKind::RecipeDeleted { .. } => "recipes.recipe.deleted",
            StoreEventKind::SignedIn { .. } => "auth.signed_in",
            StoreEventKind::SignedOut => "auth.signed_out",
            StoreEventKind::StateReset => "workspace.reset",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
