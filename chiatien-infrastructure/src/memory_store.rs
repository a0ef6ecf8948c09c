use std::sync::Mutex;

use chiatien_application::{LedgerState, LedgerStore, StoreError};

/// Process-local store; state is lost when dropped.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    state: Mutex<LedgerState>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn load(&self) -> Result<LedgerState, StoreError> {
        self.state
            .lock()
            .map(|state| state.clone())
            .map_err(|_| StoreError::Unavailable("in-memory ledger lock poisoned".to_string()))
    }

    fn save(&self, state: &LedgerState) -> Result<(), StoreError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|_| StoreError::Unavailable("in-memory ledger lock poisoned".to_string()))?;
        *guard = state.clone();
        Ok(())
    }
}
