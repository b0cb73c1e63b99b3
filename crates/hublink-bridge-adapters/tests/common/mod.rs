#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde_json::{json, Value};

use hublink_bridge_adapters::{
    BridgeAdapterConfig, MemoryStoreAdapter, SdkClientAdapter, SessionStoreAdapter,
    WalletConnectorAdapter, WidgetHostAdapter,
};
use hublink_bridge_core::{
    BridgeConfig, BridgeOrchestrator, ClockPort, ConnectorState, ConnectorStatus,
    ContractAddresses, NetworkConfig, PortError, Signer, SignerId, WidgetConfig,
};

/// Manually advanced clock; a fixed epoch offset keeps timestamps looking
/// real without the tests depending on wall time.
#[derive(Debug, Clone, Default)]
pub struct TestClock {
    now: Arc<AtomicU64>,
}

impl TestClock {
    pub fn advance(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}

impl ClockPort for TestClock {
    fn now_ms(&self) -> Result<u64, PortError> {
        Ok(self.now.load(Ordering::SeqCst) + 1_739_750_400_000)
    }
}

pub type TestOrchestrator = BridgeOrchestrator<
    WalletConnectorAdapter,
    WidgetHostAdapter,
    SdkClientAdapter,
    MemoryStoreAdapter,
    SessionStoreAdapter,
    TestClock,
>;

pub struct Harness {
    pub connector: WalletConnectorAdapter,
    pub widget: WidgetHostAdapter,
    pub sdk: SdkClientAdapter,
    pub store: MemoryStoreAdapter,
    pub session: SessionStoreAdapter,
    pub clock: TestClock,
    pub orchestrator: TestOrchestrator,
}

pub const PROFILE_BASE_URL: &str = "https://my.hubos.dev/";

pub fn harness() -> Harness {
    harness_with_networks(test_networks())
}

pub fn harness_with_networks(networks: Vec<NetworkConfig>) -> Harness {
    let adapter_config = BridgeAdapterConfig::default();
    let connector = WalletConnectorAdapter::with_config(&adapter_config);
    let widget = WidgetHostAdapter::default();
    let sdk = SdkClientAdapter::with_config(&adapter_config);
    let store = MemoryStoreAdapter::default();
    let session = SessionStoreAdapter::default();
    let clock = TestClock::default();
    let bridge_config = BridgeConfig {
        widget: WidgetConfig::default(),
        env: adapter_config.env_block(),
        networks,
        profile_base_url: PROFILE_BASE_URL.to_owned(),
    };
    let orchestrator = BridgeOrchestrator::new(
        connector.clone(),
        widget.clone(),
        sdk.clone(),
        store.clone(),
        session.clone(),
        clock.clone(),
        bridge_config,
    );
    Harness {
        connector,
        widget,
        sdk,
        store,
        session,
        clock,
        orchestrator,
    }
}

pub fn test_address(seed: u8, index: u32) -> alloy::primitives::Address {
    format!("0x{seed:02x}{index:038x}")
        .parse()
        .expect("valid test address")
}

pub fn contracts(seed: u8) -> ContractAddresses {
    ContractAddresses {
        hub_registry_address: test_address(seed, 1),
        aut_id_address: test_address(seed, 2),
        task_registry_address: test_address(seed, 3),
    }
}

pub fn network(name: &str, chain_id: u64, disabled: bool) -> NetworkConfig {
    NetworkConfig {
        network: name.to_owned(),
        chain_id,
        disabled,
        contracts: contracts(0xa0),
    }
}

pub fn test_networks() -> Vec<NetworkConfig> {
    vec![
        network("sepolia", 11155111, false),
        network("mainnet", 1, false),
    ]
}

pub fn signer(seed: u8) -> Signer {
    Signer {
        id: SignerId(format!("signer-{seed}")),
        address: test_address(seed, 9),
    }
}

pub fn connected_state(seed: u8, chain_id: u64) -> ConnectorState {
    let signer = signer(seed);
    ConnectorState {
        chain_id: Some(chain_id),
        signer_id: Some(signer.id.clone()),
        signer: Some(signer.clone()),
        is_connected: true,
        is_connecting: false,
        status: ConnectorStatus::Connected,
        address: Some(signer.address),
    }
}

pub fn profile_doc(name: &str, network_name: Option<&str>) -> Value {
    let mut properties = json!({
        "address": test_address(0x30, 1),
        "hubs": [
            {
                "name": format!("{name}-hub"),
                "properties": {
                    "address": test_address(0x30, 2),
                    "metadataUri": "ipfs://QmHub"
                }
            }
        ]
    });
    if let Some(network_name) = network_name {
        properties["network"] = json!({ "network": network_name });
    }
    json!({ "name": name, "properties": properties })
}
