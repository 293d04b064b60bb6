//! `brewerp-infra`: state container and persistence.
//!
//! Domain crates stay free of IO; this crate wires them to a state store and
//! the observer bus.

pub mod seed;
pub mod state_store;
pub mod workspace;

pub use seed::{seed_inventory, seed_recipes, seed_state};
pub use state_store::{
    InMemoryStateStore, JsonFileStateStore, PersistedState, STATE_BLOB_NAME, StateStore,
    StateStoreError,
};
pub use workspace::{Confirmation, Workspace, WorkspaceError};
