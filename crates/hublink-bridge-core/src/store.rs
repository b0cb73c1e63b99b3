use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::domain::{AuthCache, AuthSession, Hub, Identity, NetworkConfig};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletState {
    /// Replaced wholesale on every update; never partially patched.
    pub selected_network: Option<NetworkConfig>,
    pub sdk_initialized: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HubState {
    pub identity: Option<Identity>,
    pub hubs: Vec<Hub>,
    pub selected_hub_address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub auth: AuthSession,
    pub wallet: WalletState,
    pub hub: HubState,
    /// Loading gate: true until the widget reports ready with no prior
    /// session, or a login completes.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            auth: AuthSession::default(),
            wallet: WalletState::default(),
            hub: HubState::default(),
            loading: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Connector-driven network selection after a successful SDK bootstrap.
    NetworkSelected { network: NetworkConfig },
    /// Login-driven wallet update: marks the SDK initialized and replaces
    /// the selected network (which may be absent if the identity's network
    /// name is unknown to the configured list).
    SdkInitialized { network: Option<NetworkConfig> },
    Authenticated {
        identity: Identity,
        cache: Option<AuthCache>,
    },
    HubUpdated {
        identity: Identity,
        hubs: Vec<Hub>,
        selected_hub_address: Option<Address>,
    },
    LoadingCleared,
    /// The single authoritative reset. Every terminal event (logout,
    /// disconnect) routes through here; no handler clears fields ad hoc.
    Reset,
}

pub fn reduce(state: &AppState, action: &AppAction) -> AppState {
    match action {
        AppAction::NetworkSelected { network } => {
            let mut next = state.clone();
            next.wallet.selected_network = Some(network.clone());
            next
        }
        AppAction::SdkInitialized { network } => {
            let mut next = state.clone();
            next.wallet.selected_network = network.clone();
            next.wallet.sdk_initialized = true;
            next
        }
        AppAction::Authenticated { identity, cache } => {
            let mut next = state.clone();
            next.auth = AuthSession {
                is_authenticated: true,
                identity: Some(identity.clone()),
                cache: cache.clone(),
            };
            next
        }
        AppAction::HubUpdated {
            identity,
            hubs,
            selected_hub_address,
        } => {
            let mut next = state.clone();
            next.hub = HubState {
                identity: Some(identity.clone()),
                hubs: hubs.clone(),
                selected_hub_address: *selected_hub_address,
            };
            next
        }
        AppAction::LoadingCleared => {
            let mut next = state.clone();
            next.loading = false;
            next
        }
        AppAction::Reset => AppState::default(),
    }
}
