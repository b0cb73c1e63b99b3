use hublink_bridge_core::{
    BridgeConfig, ContractAddresses, EnvBlock, EnvMode, NetworkConfig, WidgetConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeProfile {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct BridgeAdapterConfig {
    pub runtime_profile: RuntimeProfile,
    /// Connector sidecar endpoint; absent means the deterministic in-memory
    /// connector (dev profile only).
    pub connector_proxy_url: Option<String>,
    /// SDK bootstrap endpoint; absent means the deterministic in-memory SDK.
    pub sdk_rpc_url: Option<String>,
    pub http_timeout_ms: u64,
    pub position_debounce_ms: u64,
    pub pump_tick_ms: u64,
    pub api_url: String,
    pub graph_api_url: String,
    pub ipfs_api_key: String,
    pub ipfs_api_secret: String,
    pub ipfs_gateway_url: String,
    pub profile_base_url: String,
    pub networks: Vec<NetworkConfig>,
}

impl Default for BridgeAdapterConfig {
    fn default() -> Self {
        Self {
            runtime_profile: RuntimeProfile::Development,
            connector_proxy_url: None,
            sdk_rpc_url: None,
            http_timeout_ms: 15_000,
            position_debounce_ms: 10,
            pump_tick_ms: 50,
            api_url: "https://api.hubos.dev".to_owned(),
            graph_api_url: "https://graph.hubos.dev".to_owned(),
            ipfs_api_key: String::new(),
            ipfs_api_secret: String::new(),
            ipfs_gateway_url: "https://ipfs.hubos.dev/ipfs/".to_owned(),
            profile_base_url: "https://my.hubos.dev/".to_owned(),
            networks: default_networks(),
        }
    }
}

impl BridgeAdapterConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(profile) = std::env::var("HUBLINK_PROFILE") {
            if profile.eq_ignore_ascii_case("production") {
                config.runtime_profile = RuntimeProfile::Production;
            }
        }
        if let Ok(url) = std::env::var("HUBLINK_CONNECTOR_PROXY_URL") {
            if !url.is_empty() {
                config.connector_proxy_url = Some(url);
            }
        }
        if let Ok(url) = std::env::var("HUBLINK_SDK_RPC_URL") {
            if !url.is_empty() {
                config.sdk_rpc_url = Some(url);
            }
        }
        if let Ok(raw) = std::env::var("HUBLINK_HTTP_TIMEOUT_MS") {
            if let Ok(parsed) = raw.parse() {
                config.http_timeout_ms = parsed;
            }
        }
        if let Ok(url) = std::env::var("HUBLINK_API_URL") {
            config.api_url = url;
        }
        if let Ok(url) = std::env::var("HUBLINK_GRAPH_API_URL") {
            config.graph_api_url = url;
        }
        if let Ok(key) = std::env::var("HUBLINK_IPFS_API_KEY") {
            config.ipfs_api_key = key;
        }
        if let Ok(secret) = std::env::var("HUBLINK_IPFS_API_SECRET") {
            config.ipfs_api_secret = secret;
        }
        if let Ok(url) = std::env::var("HUBLINK_IPFS_GATEWAY_URL") {
            config.ipfs_gateway_url = url;
        }
        if let Ok(url) = std::env::var("HUBLINK_PROFILE_BASE_URL") {
            config.profile_base_url = url;
        }
        if let Ok(raw) = std::env::var("HUBLINK_NETWORKS") {
            if let Ok(parsed) = serde_json::from_str::<Vec<NetworkConfig>>(&raw) {
                if !parsed.is_empty() {
                    config.networks = parsed;
                }
            }
        }
        config
    }

    /// In the production profile no deterministic in-memory fallback may
    /// stand in for a missing external endpoint.
    pub fn strict_runtime_required(&self) -> bool {
        self.runtime_profile == RuntimeProfile::Production
    }

    pub fn env_block(&self) -> EnvBlock {
        EnvBlock {
            api_url: self.api_url.clone(),
            graph_api_url: self.graph_api_url.clone(),
            ipfs_api_key: self.ipfs_api_key.clone(),
            ipfs_api_secret: self.ipfs_api_secret.clone(),
            ipfs_gateway_url: self.ipfs_gateway_url.clone(),
            env: match self.runtime_profile {
                RuntimeProfile::Development => EnvMode::Development,
                RuntimeProfile::Production => EnvMode::Production,
            },
        }
    }

    pub fn bridge_config(&self) -> BridgeConfig {
        BridgeConfig {
            widget: WidgetConfig::default(),
            env: self.env_block(),
            networks: self.networks.clone(),
            profile_base_url: self.profile_base_url.clone(),
        }
    }
}

fn default_networks() -> Vec<NetworkConfig> {
    vec![
        NetworkConfig {
            network: "sepolia".to_owned(),
            chain_id: 11155111,
            disabled: false,
            contracts: ContractAddresses {
                hub_registry_address: "0x5000000000000000000000000000000000000001"
                    .parse()
                    .expect("valid built-in registry address"),
                aut_id_address: "0x5000000000000000000000000000000000000002"
                    .parse()
                    .expect("valid built-in id address"),
                task_registry_address: "0x5000000000000000000000000000000000000003"
                    .parse()
                    .expect("valid built-in task registry address"),
            },
        },
        NetworkConfig {
            network: "mainnet".to_owned(),
            chain_id: 1,
            disabled: true,
            contracts: ContractAddresses {
                hub_registry_address: "0x6000000000000000000000000000000000000001"
                    .parse()
                    .expect("valid built-in registry address"),
                aut_id_address: "0x6000000000000000000000000000000000000002"
                    .parse()
                    .expect("valid built-in id address"),
                task_registry_address: "0x6000000000000000000000000000000000000003"
                    .parse()
                    .expect("valid built-in task registry address"),
            },
        },
    ]
}
