use serde::{Deserialize, Serialize};
use thiserror::Error;

use brewerp_auth::AuthState;
use brewerp_inventory::InventoryItem;
use brewerp_recipes::Recipe;

use std::sync::Arc;

/// Name the state blob is stored under.
pub const STATE_BLOB_NAME: &str = "coffee-shop-storage";

/// Everything the app remembers between runs.
///
/// Written in full after every mutation and read back in full on startup.
/// There is no schema version field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub auth: AuthState,
    pub inventory: Vec<InventoryItem>,
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Error)]
pub enum StateStoreError {
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to (de)serialize state: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("state store unavailable: {0}")]
    Unavailable(String),
}

/// Where the state blob lives.
///
/// Implementations overwrite the whole blob on `save`; there are no partial
/// writes to reconcile.
pub trait StateStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet (first run).
    fn load(&self) -> Result<Option<PersistedState>, StateStoreError>;

    fn save(&self, state: &PersistedState) -> Result<(), StateStoreError>;
}

impl<S> StateStore for Arc<S>
where
    S: StateStore + ?Sized,
{
    fn load(&self) -> Result<Option<PersistedState>, StateStoreError> {
        (**self).load()
    }

    fn save(&self, state: &PersistedState) -> Result<(), StateStoreError> {
        (**self).save(state)
    }
}
