mod common;

use hublink_bridge_core::{AppState, BridgeCommand, ConnectorState, PortError, StorePort};

use common::{connected_state, harness, harness_with_networks, network};

#[test]
fn new_signer_bootstraps_sdk_and_selects_network() {
    let mut h = harness();
    let outcome = h
        .orchestrator
        .handle(BridgeCommand::ConnectorStateChanged {
            state: connected_state(1, 1),
        })
        .expect("signer change handled");

    let receipt = outcome.initialized.expect("bootstrap ran");
    assert!(receipt.applied);
    assert_eq!(receipt.network.network, "mainnet");

    assert_eq!(h.sdk.initialize_count().expect("count"), 1);
    let bootstrap = h
        .sdk
        .current_bootstrap()
        .expect("read bootstrap")
        .expect("sdk configured");
    assert_eq!(bootstrap.network, "mainnet");
    assert_eq!(bootstrap.signer_id.0, "signer-1");

    let state = h.store.snapshot().expect("snapshot");
    let selected = state.wallet.selected_network.expect("network selected");
    assert_eq!(selected.network, "mainnet");
    assert!(
        !state.wallet.sdk_initialized,
        "connector-driven selection does not flip the login-owned flag"
    );
}

#[test]
fn unmatched_chain_falls_back_to_first_enabled_network() {
    let mut h = harness();
    h.orchestrator
        .handle(BridgeCommand::ConnectorStateChanged {
            state: connected_state(1, 424242),
        })
        .expect("signer change handled");

    let state = h.store.snapshot().expect("snapshot");
    let selected = state.wallet.selected_network.expect("network selected");
    assert_eq!(selected.network, "sepolia");
}

#[test]
fn repeated_snapshot_for_same_signer_is_a_noop() {
    let mut h = harness();
    for _ in 0..3 {
        h.orchestrator
            .handle(BridgeCommand::ConnectorStateChanged {
                state: connected_state(1, 1),
            })
            .expect("handled");
    }
    assert_eq!(h.sdk.initialize_count().expect("count"), 1);
}

#[test]
fn chain_switch_without_signer_change_is_not_reresolved() {
    let mut h = harness();
    h.orchestrator
        .handle(BridgeCommand::ConnectorStateChanged {
            state: connected_state(1, 1),
        })
        .expect("handled");
    h.orchestrator
        .handle(BridgeCommand::ConnectorStateChanged {
            state: connected_state(1, 11155111),
        })
        .expect("handled");

    assert_eq!(h.sdk.initialize_count().expect("count"), 1);
    let state = h.store.snapshot().expect("snapshot");
    assert_eq!(
        state.wallet.selected_network.expect("selected").network,
        "mainnet"
    );
}

#[test]
fn snapshot_without_signer_never_touches_the_sdk() {
    let mut h = harness();
    h.orchestrator
        .handle(BridgeCommand::ConnectorStateChanged {
            state: ConnectorState::disconnected(),
        })
        .expect("handled");
    assert_eq!(h.sdk.initialize_count().expect("count"), 0);
}

#[test]
fn all_disabled_networks_skip_the_bootstrap() {
    let mut h = harness_with_networks(vec![
        network("sepolia", 11155111, true),
        network("mainnet", 1, true),
    ]);
    let outcome = h
        .orchestrator
        .handle(BridgeCommand::ConnectorStateChanged {
            state: connected_state(1, 1),
        })
        .expect("handled");

    assert!(outcome.initialized.is_none());
    assert_eq!(h.sdk.initialize_count().expect("count"), 0);
    assert!(h
        .store
        .snapshot()
        .expect("snapshot")
        .wallet
        .selected_network
        .is_none());
}

#[test]
fn bootstrap_failure_is_fatal_to_that_attempt_only() {
    let mut h = harness();
    h.sdk.debug_fail_next("rpc unreachable").expect("arm failure");

    let err = h
        .orchestrator
        .handle(BridgeCommand::ConnectorStateChanged {
            state: connected_state(1, 1),
        })
        .expect_err("bootstrap failure propagates");
    assert!(matches!(err, PortError::Transport(_)));
    assert!(h
        .store
        .snapshot()
        .expect("snapshot")
        .wallet
        .selected_network
        .is_none());

    // A later identity change starts a fresh attempt.
    h.orchestrator
        .handle(BridgeCommand::ConnectorStateChanged {
            state: connected_state(2, 1),
        })
        .expect("next attempt succeeds");
    assert_eq!(h.sdk.initialize_count().expect("count"), 1);
}

#[test]
fn reconnecting_the_same_signer_after_disconnect_retriggers() {
    let mut h = harness();
    h.orchestrator
        .handle(BridgeCommand::ConnectorStateChanged {
            state: connected_state(1, 1),
        })
        .expect("handled");
    h.orchestrator
        .handle(BridgeCommand::DisconnectRequested)
        .expect("disconnected");
    assert_eq!(h.store.snapshot().expect("snapshot"), AppState::default());

    h.orchestrator
        .handle(BridgeCommand::ConnectorStateChanged {
            state: connected_state(1, 1),
        })
        .expect("handled");
    assert_eq!(h.sdk.initialize_count().expect("count"), 2);
}
