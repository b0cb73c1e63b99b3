use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    pub from: &'static str,
    pub to: &'static str,
    pub reason: &'static str,
}

/// Whether connector callbacks and config have been handed to the widget.
/// The widget snapshots its config at wiring time, so this fires at most
/// once per page lifetime; once wired, the widget owns its own life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandoffState {
    #[default]
    NotWired,
    Wired,
}

impl HandoffState {
    pub fn label(self) -> &'static str {
        match self {
            HandoffState::NotWired => "not_wired",
            HandoffState::Wired => "wired",
        }
    }

    /// Re-wiring is a structural no-op: the transition is only produced on
    /// the first call.
    pub fn wire(self) -> (Self, Option<StateTransition>) {
        match self {
            HandoffState::NotWired => (
                HandoffState::Wired,
                Some(StateTransition {
                    from: "not_wired",
                    to: "wired",
                    reason: "widget_handoff",
                }),
            ),
            HandoffState::Wired => (HandoffState::Wired, None),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("event bridge is already attached")]
    AlreadyAttached,
}

/// Event-bridge lifecycle. Attach is exclusive; a duplicate attach would
/// double-deliver widget events on remount, so it is an error rather than a
/// no-op. Detach is idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BridgeLifecycle {
    #[default]
    Detached,
    Attached,
}

impl BridgeLifecycle {
    pub fn label(self) -> &'static str {
        match self {
            BridgeLifecycle::Detached => "detached",
            BridgeLifecycle::Attached => "attached",
        }
    }

    pub fn attach(self) -> Result<(Self, StateTransition), LifecycleError> {
        match self {
            BridgeLifecycle::Detached => Ok((
                BridgeLifecycle::Attached,
                StateTransition {
                    from: "detached",
                    to: "attached",
                    reason: "subscribe_widget_events",
                },
            )),
            BridgeLifecycle::Attached => Err(LifecycleError::AlreadyAttached),
        }
    }

    pub fn detach(self) -> (Self, Option<StateTransition>) {
        match self {
            BridgeLifecycle::Attached => (
                BridgeLifecycle::Detached,
                Some(StateTransition {
                    from: "attached",
                    to: "detached",
                    reason: "unsubscribe_widget_events",
                }),
            ),
            BridgeLifecycle::Detached => (BridgeLifecycle::Detached, None),
        }
    }
}
