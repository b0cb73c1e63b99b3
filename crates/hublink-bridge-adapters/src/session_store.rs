use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use hublink_bridge_core::{PortError, SessionStorePort};

/// Browser-local storage stand-in: plain string keys, last-write-wins, no
/// versioning.
#[derive(Debug, Clone, Default)]
pub struct SessionStoreAdapter {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionStoreAdapter {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, PortError> {
        self.inner
            .lock()
            .map_err(|e| PortError::Transport(format!("session store lock poisoned: {e}")))
    }
}

impl SessionStorePort for SessionStoreAdapter {
    fn get(&self, key: &str) -> Result<Option<String>, PortError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), PortError> {
        self.lock()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PortError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
