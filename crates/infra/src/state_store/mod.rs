//! Persisted application state: the single `{ auth, inventory, recipes }` blob.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryStateStore;
pub use json_file::JsonFileStateStore;
pub use r#trait::{PersistedState, STATE_BLOB_NAME, StateStore, StateStoreError};
