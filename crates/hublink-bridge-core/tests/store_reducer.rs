use hublink_bridge_core::{
    reduce, AppAction, AppState, AuthCache, ContractAddresses, Identity, NetworkConfig,
    TimestampMs,
};

fn contracts() -> ContractAddresses {
    ContractAddresses {
        hub_registry_address: "0x2000000000000000000000000000000000000001"
            .parse()
            .expect("valid address"),
        aut_id_address: "0x2000000000000000000000000000000000000002"
            .parse()
            .expect("valid address"),
        task_registry_address: "0x2000000000000000000000000000000000000003"
            .parse()
            .expect("valid address"),
    }
}

fn network(name: &str, chain_id: u64) -> NetworkConfig {
    NetworkConfig {
        network: name.to_owned(),
        chain_id,
        disabled: false,
        contracts: contracts(),
    }
}

fn identity(name: &str) -> Identity {
    Identity {
        name: name.to_owned(),
        address: "0x3000000000000000000000000000000000000001"
            .parse()
            .expect("valid address"),
        network: None,
        hubs: Vec::new(),
    }
}

#[test]
fn initial_state_has_loading_gate_up() {
    let state = AppState::default();
    assert!(state.loading);
    assert!(!state.auth.is_authenticated);
    assert!(state.wallet.selected_network.is_none());
    assert!(!state.wallet.sdk_initialized);
    assert!(state.hub.identity.is_none());
}

#[test]
fn network_selection_replaces_wholesale() {
    let state = AppState::default();
    let state = reduce(
        &state,
        &AppAction::NetworkSelected {
            network: network("sepolia", 11155111),
        },
    );
    let state = reduce(
        &state,
        &AppAction::NetworkSelected {
            network: network("mainnet", 1),
        },
    );
    let selected = state.wallet.selected_network.expect("network selected");
    assert_eq!(selected.network, "mainnet");
    assert_eq!(selected.chain_id, 1);
    assert!(!state.wallet.sdk_initialized, "selection alone does not mark the sdk ready");
}

#[test]
fn sdk_initialized_can_carry_no_network() {
    let state = reduce(
        &AppState::default(),
        &AppAction::SdkInitialized { network: None },
    );
    assert!(state.wallet.sdk_initialized);
    assert!(state.wallet.selected_network.is_none());
}

#[test]
fn login_actions_populate_auth_and_hub_state() {
    let who = identity("jabyl");
    let state = reduce(
        &AppState::default(),
        &AppAction::Authenticated {
            identity: who.clone(),
            cache: Some(AuthCache {
                created_at_ms: TimestampMs(1),
                raw: serde_json::json!({"name": "jabyl"}),
            }),
        },
    );
    let state = reduce(
        &state,
        &AppAction::HubUpdated {
            identity: who.clone(),
            hubs: Vec::new(),
            selected_hub_address: None,
        },
    );
    let state = reduce(&state, &AppAction::LoadingCleared);

    assert!(state.auth.is_authenticated);
    assert_eq!(state.auth.identity, Some(who.clone()));
    assert!(state.auth.cache.is_some());
    assert_eq!(state.hub.identity, Some(who));
    assert!(!state.loading);
}

#[test]
fn reset_restores_the_initial_state_wholesale() {
    let who = identity("jabyl");
    let mut state = AppState::default();
    for action in [
        AppAction::SdkInitialized {
            network: Some(network("mainnet", 1)),
        },
        AppAction::Authenticated {
            identity: who.clone(),
            cache: None,
        },
        AppAction::HubUpdated {
            identity: who,
            hubs: Vec::new(),
            selected_hub_address: None,
        },
        AppAction::LoadingCleared,
    ] {
        state = reduce(&state, &action);
    }
    assert_ne!(state, AppState::default());

    let state = reduce(&state, &AppAction::Reset);
    assert_eq!(state, AppState::default());
}
