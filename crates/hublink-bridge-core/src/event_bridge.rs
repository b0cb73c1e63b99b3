use crate::domain::WidgetEvent;
use crate::ports::{PortError, WidgetPort};
use crate::state_machine::{BridgeLifecycle, StateTransition};

/// Typed message-passing interface over the widget's event stream.
///
/// The widget persists across host remounts as a page singleton, so the
/// subscription must be exclusive: a leaked listener would replay state
/// transitions into a second host. `attach` claims the subscription,
/// `detach` releases it, and `Drop` releases it on every teardown path.
pub struct WidgetEventBridge<W: WidgetPort> {
    widget: W,
    lifecycle: BridgeLifecycle,
}

impl<W: WidgetPort> WidgetEventBridge<W> {
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            lifecycle: BridgeLifecycle::Detached,
        }
    }

    pub fn lifecycle(&self) -> BridgeLifecycle {
        self.lifecycle
    }

    pub fn attach(&mut self) -> Result<StateTransition, PortError> {
        let (next, transition) = self
            .lifecycle
            .attach()
            .map_err(|e| PortError::Policy(e.to_string()))?;
        self.widget.subscribe()?;
        self.lifecycle = next;
        Ok(transition)
    }

    pub fn detach(&mut self) -> Result<Option<StateTransition>, PortError> {
        let (next, transition) = self.lifecycle.detach();
        if transition.is_some() {
            self.widget.unsubscribe()?;
        }
        self.lifecycle = next;
        Ok(transition)
    }

    /// Drains pending widget events. Detached bridges observe nothing;
    /// events stay queued in the widget for the next attached bridge.
    pub fn poll(&self) -> Result<Vec<WidgetEvent>, PortError> {
        match self.lifecycle {
            BridgeLifecycle::Attached => self.widget.drain_events(),
            BridgeLifecycle::Detached => Ok(Vec::new()),
        }
    }
}

impl<W: WidgetPort> Drop for WidgetEventBridge<W> {
    fn drop(&mut self) {
        if self.lifecycle == BridgeLifecycle::Attached {
            let _ = self.widget.unsubscribe();
        }
    }
}
