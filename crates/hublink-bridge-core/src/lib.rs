pub mod domain;
pub mod event_bridge;
pub mod orchestrator;
pub mod ports;
pub mod position_sync;
pub mod resolver;
pub mod state_machine;
pub mod store;

pub use domain::{
    AuthCache, AuthSession, BridgeConfig, ConnectorEvent, ConnectorEventKind, ConnectorState,
    ConnectorStatus, ContractAddresses, EnvBlock, EnvMode, FlowConfig, HandoffPayload, Hub,
    Identity, IdentityNetwork, MenuActionKind, MenuItem, NetworkConfig, ProfileParseError, Rect,
    Signer, SignerId, TimestampMs, TextAlignment, WidgetConfig, WidgetEvent, WidgetMountConfig,
    WidgetSize, WidgetTheme, AUTH_TOKEN_KEY, PROFILE_CACHE_KEY, PROFILE_MENU_EVENT,
    WIDGET_LOGIN_EVENT, WIDGET_LOGOUT_EVENT, WIDGET_READY_EVENT,
};
pub use event_bridge::WidgetEventBridge;
pub use orchestrator::{
    BridgeCommand, BridgeOrchestrator, CommandOutcome, InitAttempt, InitReceipt,
};
pub use ports::{
    ClockPort, ConnectorPort, LayoutPort, PortError, SdkPort, SessionStorePort, StorePort,
    WidgetPort,
};
pub use position_sync::{PositionSync, SyncOutcome, DEFAULT_DEBOUNCE_MS};
pub use state_machine::{BridgeLifecycle, HandoffState, LifecycleError, StateTransition};
pub use store::{reduce, AppAction, AppState, HubState, WalletState};
