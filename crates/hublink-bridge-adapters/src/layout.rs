use std::sync::{Arc, Mutex};

use hublink_bridge_core::{LayoutPort, PortError, Rect};

/// Placeholder geometry source. The shell positions the placeholder block;
/// the sync loop reads it back each tick.
#[derive(Debug, Clone)]
pub struct FixedLayoutAdapter {
    inner: Arc<Mutex<Option<Rect>>>,
}

impl Default for FixedLayoutAdapter {
    fn default() -> Self {
        // The placeholder block the widget shadows: 244x55 at the layout origin.
        Self::with_rect(Rect {
            left: 0.0,
            top: 0.0,
            width: 244.0,
            height: 55.0,
        })
    }
}

impl FixedLayoutAdapter {
    pub fn with_rect(rect: Rect) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(rect))),
        }
    }

    pub fn empty() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_rect(&self, rect: Rect) -> Result<(), PortError> {
        *self.lock()? = Some(rect);
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<Rect>>, PortError> {
        self.inner
            .lock()
            .map_err(|e| PortError::Transport(format!("layout lock poisoned: {e}")))
    }
}

impl LayoutPort for FixedLayoutAdapter {
    fn placeholder_rect(&self) -> Result<Option<Rect>, PortError> {
        Ok(*self.lock()?)
    }
}
