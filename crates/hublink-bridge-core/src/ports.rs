use thiserror::Error;

use crate::domain::{
    ConnectorEvent, ConnectorState, HandoffPayload, NetworkConfig, Rect, Signer, WidgetEvent,
};
use crate::store::{AppAction, AppState};

#[derive(Debug, Error)]
pub enum PortError {
    #[error("port not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("policy error: {0}")]
    Policy(String),
    #[error("not found: {0}")]
    NotFound(String),
}

/// View over the external wallet connector. Failures of the underlying
/// wallet flow (rejected prompt, dropped session) surface as `ConnectorState`
/// transitions, not as `Err`; only transport-level breakage is an error.
pub trait ConnectorPort {
    fn connect(&self) -> Result<ConnectorState, PortError>;
    fn disconnect(&self) -> Result<ConnectorState, PortError>;
    fn state(&self) -> Result<ConnectorState, PortError>;
    fn drain_events(&self) -> Result<Vec<ConnectorEvent>, PortError>;
}

/// The externally mounted, page-singleton widget element.
///
/// `subscribe`/`unsubscribe` gate event delivery: a second subscription while
/// one is live is rejected, so a remounting host cannot end up with duplicate
/// listeners on the singleton.
pub trait WidgetPort {
    fn push_handoff(&self, payload: &HandoffPayload) -> Result<(), PortError>;
    fn handoff_count(&self) -> Result<u64, PortError>;
    fn subscribe(&self) -> Result<(), PortError>;
    fn unsubscribe(&self) -> Result<(), PortError>;
    fn drain_events(&self) -> Result<Vec<WidgetEvent>, PortError>;
    fn locate(&self) -> Result<bool, PortError>;
    fn set_position(&self, rect: Rect) -> Result<(), PortError>;
    fn set_visible(&self, visible: bool) -> Result<(), PortError>;
}

/// Configures the process-wide SDK singleton for a (signer, network) pair.
/// Re-initialization overwrites the configuration in place; it never creates
/// a second instance. Only the orchestrator may call this.
pub trait SdkPort {
    fn initialize(&self, signer: &Signer, network: &NetworkConfig) -> Result<(), PortError>;
}

/// The authoritative application store. All writes go through `dispatch`;
/// terminal events route through `AppAction::Reset` and nothing else.
pub trait StorePort {
    fn dispatch(&self, action: AppAction) -> Result<(), PortError>;
    fn snapshot(&self) -> Result<AppState, PortError>;
}

/// Plain string storage for the persisted profile document and auth token.
/// Last-write-wins, no versioning.
pub trait SessionStorePort {
    fn get(&self, key: &str) -> Result<Option<String>, PortError>;
    fn put(&self, key: &str, value: &str) -> Result<(), PortError>;
    fn remove(&self, key: &str) -> Result<(), PortError>;
}

/// Source of the placeholder element's geometry.
pub trait LayoutPort {
    fn placeholder_rect(&self) -> Result<Option<Rect>, PortError>;
}

pub trait ClockPort {
    fn now_ms(&self) -> Result<u64, PortError>;
}
