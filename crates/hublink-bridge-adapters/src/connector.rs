use std::sync::{Arc, Mutex};

use serde_json::Value;

use hublink_bridge_core::{
    ConnectorEvent, ConnectorEventKind, ConnectorPort, ConnectorState, ConnectorStatus, PortError,
    Signer, SignerId,
};

use crate::BridgeAdapterConfig;

/// Wallet connector adapter. Wallet-level failures (a rejected prompt, a
/// dropped session) come back as state snapshots with `status: Error`;
/// `Err` is reserved for transport breakage.
#[derive(Debug, Clone)]
pub struct WalletConnectorAdapter {
    mode: ConnectorMode,
    inner: Arc<Mutex<ConnectorInner>>,
}

#[derive(Debug, Clone)]
enum ConnectorMode {
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
struct ConnectorInner {
    state: ConnectorState,
    event_seq: u64,
    events: Vec<ConnectorEvent>,
}

impl Default for WalletConnectorAdapter {
    fn default() -> Self {
        Self::with_config(&BridgeAdapterConfig::default())
    }
}

impl WalletConnectorAdapter {
    pub fn with_config(config: &BridgeAdapterConfig) -> Self {
        let mode = if let Some(ref base_url) = config.connector_proxy_url {
            let timeout = std::time::Duration::from_millis(config.http_timeout_ms);
            match reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()
            {
                Ok(client) => ConnectorMode::Proxy(ProxyRuntime {
                    base_url: base_url.clone(),
                    client,
                }),
                Err(e) => {
                    if config.strict_runtime_required() {
                        ConnectorMode::Disabled(format!(
                            "failed to initialize connector proxy client in production profile: {e}"
                        ))
                    } else {
                        ConnectorMode::Deterministic
                    }
                }
            }
        } else if config.strict_runtime_required() {
            ConnectorMode::Disabled(
                "connector proxy URL not configured in production runtime profile".to_owned(),
            )
        } else {
            ConnectorMode::Deterministic
        };

        Self {
            mode,
            inner: Arc::new(Mutex::new(ConnectorInner::default())),
        }
    }

    fn check_mode(&self) -> Result<(), PortError> {
        if let ConnectorMode::Disabled(reason) = &self.mode {
            return Err(PortError::Policy(reason.clone()));
        }
        Ok(())
    }

    fn apply_state(&self, next: ConnectorState) -> Result<ConnectorState, PortError> {
        let mut g = self
            .inner
            .lock()
            .map_err(|e| PortError::Transport(format!("connector lock poisoned: {e}")))?;
        let kind = event_kind(&g.state, &next);
        g.state = next.clone();
        if let Some(kind) = kind {
            g.event_seq = g.event_seq.saturating_add(1);
            let sequence = g.event_seq;
            g.events.push(ConnectorEvent {
                sequence,
                kind,
                state: next.clone(),
            });
        }
        Ok(next)
    }

    /// Test/dev hook: push an externally observed state into the adapter as
    /// if the wallet had reported it.
    pub fn debug_inject_state(&self, state: ConnectorState) -> Result<(), PortError> {
        self.apply_state(state).map(|_| ())
    }

    fn deterministic_connected_state() -> ConnectorState {
        let address = "0x1000000000000000000000000000000000000001"
            .parse()
            .expect("valid built-in deterministic account");
        let signer = Signer {
            id: SignerId("signer-dev-1".to_owned()),
            address,
        };
        ConnectorState {
            chain_id: Some(11155111),
            signer_id: Some(signer.id.clone()),
            signer: Some(signer),
            is_connected: true,
            is_connecting: false,
            status: ConnectorStatus::Connected,
            address: Some(address),
        }
    }

    fn proxy_call(&self, method: &str, params: Value) -> Result<Value, PortError> {
        let proxy = match &self.mode {
            ConnectorMode::Proxy(proxy) => proxy,
            ConnectorMode::Disabled(reason) => return Err(PortError::Policy(reason.clone())),
            ConnectorMode::Deterministic => {
                return Err(PortError::NotImplemented("connector proxy runtime not enabled"))
            }
        };

        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let response = proxy
            .client
            .post(&proxy.base_url)
            .json(&payload)
            .send()
            .map_err(|e| PortError::Transport(format!("connector proxy request failed: {e}")))?;
        let status = response.status();
        let body: Value = response
            .json()
            .map_err(|e| PortError::Transport(format!("connector proxy json decode failed: {e}")))?;
        if !status.is_success() {
            return Err(PortError::Transport(format!(
                "connector proxy status {}: {}",
                status, body
            )));
        }
        if let Some(err) = body.get("error") {
            return Err(PortError::Transport(format!(
                "connector proxy returned error: {err}"
            )));
        }
        body.get("result")
            .cloned()
            .ok_or_else(|| PortError::Transport("connector proxy missing result".to_owned()))
    }

    fn proxy_state_call(&self, method: &str) -> Result<ConnectorState, PortError> {
        let result = self.proxy_call(method, serde_json::json!([]))?;
        let state: ConnectorState = serde_json::from_value(result)
            .map_err(|e| PortError::Validation(format!("invalid connector state: {e}")))?;
        self.apply_state(state)
    }
}

impl ConnectorPort for WalletConnectorAdapter {
    fn connect(&self) -> Result<ConnectorState, PortError> {
        self.check_mode()?;
        match &self.mode {
            ConnectorMode::Proxy(_) => self.proxy_state_call("connector_connect"),
            _ => self.apply_state(Self::deterministic_connected_state()),
        }
    }

    fn disconnect(&self) -> Result<ConnectorState, PortError> {
        self.check_mode()?;
        match &self.mode {
            ConnectorMode::Proxy(_) => self.proxy_state_call("connector_disconnect"),
            _ => self.apply_state(ConnectorState::disconnected()),
        }
    }

    fn state(&self) -> Result<ConnectorState, PortError> {
        self.check_mode()?;
        if let ConnectorMode::Proxy(_) = self.mode {
            return self.proxy_state_call("connector_state");
        }
        let g = self
            .inner
            .lock()
            .map_err(|e| PortError::Transport(format!("connector lock poisoned: {e}")))?;
        Ok(g.state.clone())
    }

    fn drain_events(&self) -> Result<Vec<ConnectorEvent>, PortError> {
        self.check_mode()?;
        let mut g = self
            .inner
            .lock()
            .map_err(|e| PortError::Transport(format!("connector lock poisoned: {e}")))?;
        Ok(std::mem::take(&mut g.events))
    }
}

fn event_kind(before: &ConnectorState, after: &ConnectorState) -> Option<ConnectorEventKind> {
    if before == after {
        return None;
    }
    if before.signer_id != after.signer_id || before.address != after.address {
        Some(ConnectorEventKind::AccountChanged)
    } else if before.chain_id != after.chain_id {
        Some(ConnectorEventKind::ChainChanged)
    } else {
        Some(ConnectorEventKind::StatusChanged)
    }
}
