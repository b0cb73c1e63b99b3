use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Storage key for the last-known profile document pushed by the widget.
pub const PROFILE_CACHE_KEY: &str = "aut-data";

/// Storage key for the persisted auth token.
pub const AUTH_TOKEN_KEY: &str = "access-token";

/// Wire-level event names emitted by the mounted widget element.
pub const WIDGET_READY_EVENT: &str = "aut-Init";
pub const WIDGET_LOGIN_EVENT: &str = "aut-onConnected";
pub const WIDGET_LOGOUT_EVENT: &str = "aut-onDisconnected";
pub const PROFILE_MENU_EVENT: &str = "aut_profile";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampMs(pub u64);

/// Opaque key identifying the currently connected wallet account within a
/// session. Equality on this value is the only signal the orchestrator keys
/// its reactive rule off.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignerId(pub String);

impl std::fmt::Display for SignerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    pub id: SignerId,
    pub address: Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorStatus {
    Disconnected,
    Connecting,
    Reconnecting,
    Connected,
    /// Failure surfaced by the connector as a state, never as a thrown error
    /// (rejected wallet prompt, lost transport).
    Error,
}

/// Live connector snapshot. Produced by the connector adapter; read-only to
/// the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorState {
    pub chain_id: Option<u64>,
    pub signer_id: Option<SignerId>,
    pub signer: Option<Signer>,
    pub is_connected: bool,
    pub is_connecting: bool,
    pub status: ConnectorStatus,
    pub address: Option<Address>,
}

impl ConnectorState {
    pub fn disconnected() -> Self {
        Self {
            chain_id: None,
            signer_id: None,
            signer: None,
            is_connected: false,
            is_connecting: false,
            status: ConnectorStatus::Disconnected,
            address: None,
        }
    }
}

impl Default for ConnectorState {
    fn default() -> Self {
        Self::disconnected()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectorEventKind {
    AccountChanged,
    ChainChanged,
    StatusChanged,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorEvent {
    pub sequence: u64,
    pub kind: ConnectorEventKind,
    pub state: ConnectorState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAddresses {
    pub hub_registry_address: Address,
    pub aut_id_address: Address,
    pub task_registry_address: Address,
}

/// One configured network. Loaded once at startup and immutable afterwards;
/// list order is priority order for resolution fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub network: String,
    pub chain_id: u64,
    pub disabled: bool,
    pub contracts: ContractAddresses,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hub {
    pub address: Address,
    pub name: String,
    pub metadata_uri: Option<String>,
}

/// Network association carried by a login profile, when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityNetwork {
    pub network: String,
    pub chain_id: Option<u64>,
}

/// Strongly-typed identity record parsed from the widget login payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub address: Address,
    pub network: Option<IdentityNetwork>,
    pub hubs: Vec<Hub>,
}

#[derive(Debug, Error)]
pub enum ProfileParseError {
    #[error("profile field missing: {0}")]
    MissingField(&'static str),
    #[error("profile field invalid: {0}: {1}")]
    InvalidField(&'static str, String),
}

impl Identity {
    /// Parses the widget's raw profile document. The document is externally
    /// supplied; parsing fails closed on any missing or malformed field.
    ///
    /// Expected shape:
    /// `{ name, properties: { address, network?: { network, chainId? },
    ///    hubs?: [ { name, properties: { address, metadataUri? } } ] } }`
    pub fn parse(doc: &Value) -> Result<Self, ProfileParseError> {
        let name = doc
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or(ProfileParseError::MissingField("name"))?
            .to_owned();
        let properties = doc
            .get("properties")
            .ok_or(ProfileParseError::MissingField("properties"))?;
        let address = parse_address(properties, "address", "properties.address")?;

        let network = match properties.get("network") {
            None | Some(Value::Null) => None,
            Some(raw) => {
                let network_name = raw
                    .get("network")
                    .and_then(|v| v.as_str())
                    .ok_or(ProfileParseError::MissingField("properties.network.network"))?
                    .to_owned();
                let chain_id = raw.get("chainId").and_then(|v| v.as_u64());
                Some(IdentityNetwork {
                    network: network_name,
                    chain_id,
                })
            }
        };

        let mut hubs = Vec::new();
        if let Some(raw_hubs) = properties.get("hubs") {
            let entries = raw_hubs
                .as_array()
                .ok_or(ProfileParseError::MissingField("properties.hubs"))?;
            for entry in entries {
                let hub_name = entry
                    .get("name")
                    .and_then(|v| v.as_str())
                    .ok_or(ProfileParseError::MissingField("hubs[].name"))?
                    .to_owned();
                let hub_properties = entry
                    .get("properties")
                    .ok_or(ProfileParseError::MissingField("hubs[].properties"))?;
                let hub_address =
                    parse_address(hub_properties, "address", "hubs[].properties.address")?;
                let metadata_uri = hub_properties
                    .get("metadataUri")
                    .and_then(|v| v.as_str())
                    .map(str::to_owned);
                hubs.push(Hub {
                    address: hub_address,
                    name: hub_name,
                    metadata_uri,
                });
            }
        }

        Ok(Self {
            name,
            address,
            network,
            hubs,
        })
    }
}

fn parse_address(
    container: &Value,
    key: &str,
    label: &'static str,
) -> Result<Address, ProfileParseError> {
    let raw = container
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or(ProfileParseError::MissingField(label))?;
    raw.parse()
        .map_err(|e| ProfileParseError::InvalidField(label, format!("{e}")))
}

/// Cached login payload, kept alongside the session so the profile menu can
/// be served without re-parsing storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthCache {
    pub created_at_ms: TimestampMs,
    pub raw: Value,
}

/// The authenticated session. Destroyed wholesale on logout or disconnect,
/// never cleared field-by-field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub is_authenticated: bool,
    pub identity: Option<Identity>,
    pub cache: Option<AuthCache>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvMode {
    Development,
    Production,
}

/// Environment block handed to the widget at wiring time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct EnvBlock {
    pub api_url: String,
    pub graph_api_url: String,
    pub ipfs_api_key: String,
    pub ipfs_api_secret: String,
    pub ipfs_gateway_url: String,
    pub env: EnvMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetTheme {
    pub color: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSize {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

/// Presentation config snapshot passed to the widget once, at wiring time.
/// The widget takes its own copy; later changes on the host side are not
/// observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    pub default_text: String,
    pub text_alignment: TextAlignment,
    pub menu_text_alignment: TextAlignment,
    pub theme: WidgetTheme,
    pub size: WidgetSize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            default_text: "Connect Wallet".to_owned(),
            text_alignment: TextAlignment::Right,
            menu_text_alignment: TextAlignment::Left,
            theme: WidgetTheme {
                color: "offWhite".to_owned(),
                kind: "main".to_owned(),
            },
            size: WidgetSize {
                width: 240,
                height: 50,
                padding: 3,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuActionKind {
    EventEmit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    pub action_type: MenuActionKind,
    pub event_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowConfig {
    pub mode: String,
    pub custom_congrats_message: String,
}

/// Static attributes the widget element is mounted with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WidgetMountConfig {
    pub use_dev: bool,
    pub menu_items: Vec<MenuItem>,
    pub flow_config: FlowConfig,
    pub ipfs_gateway: String,
}

impl Default for WidgetMountConfig {
    fn default() -> Self {
        Self {
            use_dev: false,
            menu_items: vec![MenuItem {
                name: "Profile".to_owned(),
                action_type: MenuActionKind::EventEmit,
                event_name: PROFILE_MENU_EVENT.to_owned(),
            }],
            flow_config: FlowConfig {
                mode: "signin".to_owned(),
                custom_congrats_message: String::new(),
            },
            ipfs_gateway: String::new(),
        }
    }
}

/// The one-shot snapshot pushed into the widget when the handoff fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffPayload {
    pub config: WidgetConfig,
    pub env: EnvBlock,
    pub networks: Vec<NetworkConfig>,
    pub connector_state: ConnectorState,
}

/// Typed rendition of the events the mounted widget emits.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    Ready,
    Login(Value),
    Logout,
    MenuAction { event_name: String },
}

/// Everything the orchestrator needs that is fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub widget: WidgetConfig,
    pub env: EnvBlock,
    pub networks: Vec<NetworkConfig>,
    /// Base URL the profile menu opens; the cached profile name is appended.
    pub profile_base_url: String,
}

/// CSS-pixel geometry of the placeholder / widget element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}
