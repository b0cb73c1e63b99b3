use std::sync::{Arc, Mutex};

use serde_json::Value;

use hublink_bridge_core::{
    HandoffPayload, PortError, Rect, WidgetEvent, WidgetMountConfig, WidgetPort,
    WIDGET_LOGIN_EVENT, WIDGET_LOGOUT_EVENT, WIDGET_READY_EVENT,
};

/// In-process stand-in for the page-singleton widget element.
///
/// The real element lives outside the host's lifecycle and speaks only named
/// events; this adapter keeps the same shape: a mount config, a one-shot
/// handoff slot, a queue of emitted events, and an exclusive subscription.
#[derive(Debug, Clone)]
pub struct WidgetHostAdapter {
    inner: Arc<Mutex<WidgetInner>>,
}

#[derive(Debug)]
struct WidgetInner {
    mount: WidgetMountConfig,
    present: bool,
    handoff: Option<HandoffPayload>,
    handoff_count: u64,
    subscribed: bool,
    events: Vec<WidgetEvent>,
    position: Option<Rect>,
    visible: bool,
}

impl Default for WidgetHostAdapter {
    fn default() -> Self {
        Self::mounted(WidgetMountConfig::default())
    }
}

impl WidgetHostAdapter {
    pub fn mounted(mount: WidgetMountConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(WidgetInner {
                mount,
                present: true,
                handoff: None,
                handoff_count: 0,
                subscribed: false,
                events: Vec::new(),
                position: None,
                visible: false,
            })),
        }
    }

    /// An element that has not appeared on the page yet. `mount_now` flips
    /// it present later, the way the singleton shows up asynchronously.
    pub fn absent() -> Self {
        let adapter = Self::default();
        if let Ok(mut g) = adapter.inner.lock() {
            g.present = false;
        }
        adapter
    }

    pub fn mount_now(&self) -> Result<(), PortError> {
        let mut g = self.lock()?;
        g.present = true;
        Ok(())
    }

    /// Routes a wire-level named event into the typed queue, the way the
    /// element dispatches DOM custom events. Unknown names that match no
    /// configured menu item are dropped.
    pub fn dispatch_named_event(&self, name: &str, detail: Option<Value>) -> Result<(), PortError> {
        let mut g = self.lock()?;
        if !g.present {
            return Err(PortError::NotFound("widget element not mounted".to_owned()));
        }
        let event = match name {
            WIDGET_READY_EVENT => Some(WidgetEvent::Ready),
            WIDGET_LOGIN_EVENT => {
                let detail = detail.ok_or_else(|| {
                    PortError::Validation("login event carries no detail".to_owned())
                })?;
                Some(WidgetEvent::Login(detail))
            }
            WIDGET_LOGOUT_EVENT => Some(WidgetEvent::Logout),
            other => g
                .mount
                .menu_items
                .iter()
                .find(|item| item.event_name == other)
                .map(|item| WidgetEvent::MenuAction {
                    event_name: item.event_name.clone(),
                }),
        };
        if let Some(event) = event {
            g.events.push(event);
        }
        Ok(())
    }

    pub fn emit_ready(&self) -> Result<(), PortError> {
        self.dispatch_named_event(WIDGET_READY_EVENT, None)
    }

    pub fn emit_login(&self, profile: Value) -> Result<(), PortError> {
        self.dispatch_named_event(WIDGET_LOGIN_EVENT, Some(profile))
    }

    pub fn emit_logout(&self) -> Result<(), PortError> {
        self.dispatch_named_event(WIDGET_LOGOUT_EVENT, None)
    }

    pub fn emit_menu(&self, event_name: &str) -> Result<(), PortError> {
        self.dispatch_named_event(event_name, None)
    }

    pub fn mount_config(&self) -> Result<WidgetMountConfig, PortError> {
        Ok(self.lock()?.mount.clone())
    }

    pub fn last_handoff(&self) -> Result<Option<HandoffPayload>, PortError> {
        Ok(self.lock()?.handoff.clone())
    }

    pub fn position(&self) -> Result<Option<Rect>, PortError> {
        Ok(self.lock()?.position)
    }

    pub fn is_visible(&self) -> Result<bool, PortError> {
        Ok(self.lock()?.visible)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, WidgetInner>, PortError> {
        self.inner
            .lock()
            .map_err(|e| PortError::Transport(format!("widget lock poisoned: {e}")))
    }
}

impl WidgetPort for WidgetHostAdapter {
    fn push_handoff(&self, payload: &HandoffPayload) -> Result<(), PortError> {
        let mut g = self.lock()?;
        if !g.present {
            return Err(PortError::NotFound("widget element not mounted".to_owned()));
        }
        g.handoff = Some(payload.clone());
        g.handoff_count = g.handoff_count.saturating_add(1);
        Ok(())
    }

    fn handoff_count(&self) -> Result<u64, PortError> {
        Ok(self.lock()?.handoff_count)
    }

    fn subscribe(&self) -> Result<(), PortError> {
        let mut g = self.lock()?;
        if g.subscribed {
            return Err(PortError::Policy(
                "widget event subscription already held".to_owned(),
            ));
        }
        g.subscribed = true;
        Ok(())
    }

    fn unsubscribe(&self) -> Result<(), PortError> {
        let mut g = self.lock()?;
        g.subscribed = false;
        Ok(())
    }

    fn drain_events(&self) -> Result<Vec<WidgetEvent>, PortError> {
        let mut g = self.lock()?;
        if !g.subscribed {
            return Err(PortError::Policy(
                "widget events drained without a subscription".to_owned(),
            ));
        }
        Ok(std::mem::take(&mut g.events))
    }

    fn locate(&self) -> Result<bool, PortError> {
        Ok(self.lock()?.present)
    }

    fn set_position(&self, rect: Rect) -> Result<(), PortError> {
        let mut g = self.lock()?;
        if !g.present {
            return Err(PortError::NotFound("widget element not mounted".to_owned()));
        }
        g.position = Some(rect);
        Ok(())
    }

    fn set_visible(&self, visible: bool) -> Result<(), PortError> {
        let mut g = self.lock()?;
        if !g.present {
            return Err(PortError::NotFound("widget element not mounted".to_owned()));
        }
        g.visible = visible;
        Ok(())
    }
}
