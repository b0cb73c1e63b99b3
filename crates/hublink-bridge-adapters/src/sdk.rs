use std::sync::{Arc, Mutex};

use serde_json::Value;

use hublink_bridge_core::{NetworkConfig, PortError, SdkPort, Signer, SignerId};

use crate::BridgeAdapterConfig;

/// The configuration the SDK singleton currently holds. Overwritten in
/// place on every initialization; there is never a second instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkBootstrap {
    pub signer_id: SignerId,
    pub signer_address: alloy::primitives::Address,
    pub network: String,
    pub chain_id: u64,
    pub hub_registry_address: alloy::primitives::Address,
    pub aut_id_address: alloy::primitives::Address,
    pub task_registry_address: alloy::primitives::Address,
}

#[derive(Debug, Clone)]
pub struct SdkClientAdapter {
    mode: SdkMode,
    inner: Arc<Mutex<SdkInner>>,
}

#[derive(Debug, Clone)]
enum SdkMode {
    Disabled(String),
    Deterministic,
    Proxy(ProxyRuntime),
}

#[derive(Debug, Clone)]
struct ProxyRuntime {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Default)]
struct SdkInner {
    bootstrap: Option<SdkBootstrap>,
    initialize_count: u64,
    fail_next: Option<String>,
}

impl Default for SdkClientAdapter {
    fn default() -> Self {
        Self::with_config(&BridgeAdapterConfig::default())
    }
}

impl SdkClientAdapter {
    pub fn with_config(config: &BridgeAdapterConfig) -> Self {
        let mode = if let Some(ref base_url) = config.sdk_rpc_url {
            let timeout = std::time::Duration::from_millis(config.http_timeout_ms);
            match reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()
            {
                Ok(client) => SdkMode::Proxy(ProxyRuntime {
                    base_url: base_url.clone(),
                    client,
                }),
                Err(e) => {
                    if config.strict_runtime_required() {
                        SdkMode::Disabled(format!(
                            "failed to initialize sdk client in production profile: {e}"
                        ))
                    } else {
                        SdkMode::Deterministic
                    }
                }
            }
        } else if config.strict_runtime_required() {
            SdkMode::Disabled("sdk RPC URL not configured in production runtime profile".to_owned())
        } else {
            SdkMode::Deterministic
        };

        Self {
            mode,
            inner: Arc::new(Mutex::new(SdkInner::default())),
        }
    }

    pub fn current_bootstrap(&self) -> Result<Option<SdkBootstrap>, PortError> {
        Ok(self.lock()?.bootstrap.clone())
    }

    pub fn initialize_count(&self) -> Result<u64, PortError> {
        Ok(self.lock()?.initialize_count)
    }

    /// Test hook: the next initialize call fails with the given message,
    /// leaving the current configuration untouched.
    pub fn debug_fail_next(&self, message: &str) -> Result<(), PortError> {
        self.lock()?.fail_next = Some(message.to_owned());
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, SdkInner>, PortError> {
        self.inner
            .lock()
            .map_err(|e| PortError::Transport(format!("sdk lock poisoned: {e}")))
    }

    fn proxy_initialize(&self, bootstrap: &SdkBootstrap) -> Result<(), PortError> {
        let proxy = match &self.mode {
            SdkMode::Proxy(proxy) => proxy,
            SdkMode::Disabled(reason) => return Err(PortError::Policy(reason.clone())),
            SdkMode::Deterministic => {
                return Err(PortError::NotImplemented("sdk proxy runtime not enabled"))
            }
        };

        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "sdk_initialize",
            "params": [{
                "signerAddress": bootstrap.signer_address,
                "chainId": bootstrap.chain_id,
                "hubRegistryAddress": bootstrap.hub_registry_address,
                "autIdAddress": bootstrap.aut_id_address,
                "taskRegistryAddress": bootstrap.task_registry_address,
            }],
        });
        let response = proxy
            .client
            .post(&proxy.base_url)
            .json(&payload)
            .send()
            .map_err(|e| PortError::Transport(format!("sdk bootstrap request failed: {e}")))?;
        let status = response.status();
        let body: Value = response
            .json()
            .map_err(|e| PortError::Transport(format!("sdk bootstrap json decode failed: {e}")))?;
        if !status.is_success() {
            return Err(PortError::Transport(format!(
                "sdk bootstrap status {}: {}",
                status, body
            )));
        }
        if let Some(err) = body.get("error") {
            return Err(PortError::Transport(format!(
                "sdk bootstrap returned error: {err}"
            )));
        }
        Ok(())
    }
}

impl SdkPort for SdkClientAdapter {
    fn initialize(&self, signer: &Signer, network: &NetworkConfig) -> Result<(), PortError> {
        if let SdkMode::Disabled(reason) = &self.mode {
            return Err(PortError::Policy(reason.clone()));
        }
        {
            let mut g = self.lock()?;
            if let Some(message) = g.fail_next.take() {
                return Err(PortError::Transport(message));
            }
        }

        let bootstrap = SdkBootstrap {
            signer_id: signer.id.clone(),
            signer_address: signer.address,
            network: network.network.clone(),
            chain_id: network.chain_id,
            hub_registry_address: network.contracts.hub_registry_address,
            aut_id_address: network.contracts.aut_id_address,
            task_registry_address: network.contracts.task_registry_address,
        };

        if let SdkMode::Proxy(_) = self.mode {
            self.proxy_initialize(&bootstrap)?;
        }

        let mut g = self.lock()?;
        g.bootstrap = Some(bootstrap);
        g.initialize_count = g.initialize_count.saturating_add(1);
        Ok(())
    }
}
