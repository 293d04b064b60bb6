use std::sync::RwLock;

use super::r#trait::{PersistedState, StateStore, StateStoreError};

/// In-memory state store.
///
/// Intended for tests/dev. `fail_saves` simulates a full disk.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    state: RwLock<Option<PersistedState>>,
    fail_saves: RwLock<bool>,
    saves: RwLock<u64>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: PersistedState) -> Self {
        Self {
            state: RwLock::new(Some(state)),
            ..Self::default()
        }
    }

    /// Make every following `save` fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        if let Ok(mut flag) = self.fail_saves.write() {
            *flag = fail;
        }
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> u64 {
        self.saves.read().map(|n| *n).unwrap_or(0)
    }

    /// Last successfully saved state.
    pub fn snapshot(&self) -> Option<PersistedState> {
        self.state.read().ok().and_then(|s| s.clone())
    }
}

impl StateStore for InMemoryStateStore {
    fn load(&self) -> Result<Option<PersistedState>, StateStoreError> {
        let state = self
            .state
            .read()
            .map_err(|_| StateStoreError::Unavailable("lock poisoned".into()))?;
        Ok(state.clone())
    }

    fn save(&self, state: &PersistedState) -> Result<(), StateStoreError> {
        let failing = self.fail_saves.read().map(|f| *f).unwrap_or(false);
        if failing {
            return Err(StateStoreError::Unavailable("saves disabled".into()));
        }

        let mut slot = self
            .state
            .write()
            .map_err(|_| StateStoreError::Unavailable("lock poisoned".into()))?;
        *slot = Some(state.clone());

        if let Ok(mut saves) = self.saves.write() {
            *saves += 1;
        }
        Ok(())
    }
}
