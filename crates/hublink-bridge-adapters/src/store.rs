use std::sync::{Arc, Mutex};

use hublink_bridge_core::{reduce, AppAction, AppState, PortError, StorePort};

/// Authoritative in-memory application store: every write funnels through
/// the reducer, so terminal events reset wholesale by construction.
#[derive(Debug, Clone, Default)]
pub struct MemoryStoreAdapter {
    inner: Arc<Mutex<AppState>>,
}

impl MemoryStoreAdapter {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, AppState>, PortError> {
        self.inner
            .lock()
            .map_err(|e| PortError::Transport(format!("store lock poisoned: {e}")))
    }
}

impl StorePort for MemoryStoreAdapter {
    fn dispatch(&self, action: AppAction) -> Result<(), PortError> {
        let mut g = self.lock()?;
        *g = reduce(&g, &action);
        Ok(())
    }

    fn snapshot(&self) -> Result<AppState, PortError> {
        Ok(self.lock()?.clone())
    }
}
