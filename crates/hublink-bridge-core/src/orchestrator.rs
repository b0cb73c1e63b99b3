use serde_json::Value;

use crate::domain::{
    AuthCache, BridgeConfig, ConnectorState, HandoffPayload, Identity, NetworkConfig, Signer,
    SignerId, TimestampMs, WidgetEvent, AUTH_TOKEN_KEY, PROFILE_CACHE_KEY, PROFILE_MENU_EVENT,
};
use crate::ports::{
    ClockPort, ConnectorPort, PortError, SdkPort, SessionStorePort, StorePort, WidgetPort,
};
use crate::resolver;
use crate::state_machine::{HandoffState, StateTransition};
use crate::store::AppAction;

#[derive(Debug, Clone)]
pub enum BridgeCommand {
    ConnectRequested,
    DisconnectRequested,
    ConnectorStateChanged { state: ConnectorState },
    WireWidget,
    Widget(WidgetEvent),
}

/// One SDK bootstrap attempt, tagged with the generation that was current
/// when it began. Completions are applied only while their generation is
/// still current; superseded or post-disconnect completions are discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct InitAttempt {
    pub generation: u64,
    pub signer: Signer,
    pub network: NetworkConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InitReceipt {
    pub generation: u64,
    pub network: NetworkConfig,
    pub applied: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    pub transition: Option<StateTransition>,
    pub initialized: Option<InitReceipt>,
    pub opened_url: Option<String>,
}

impl CommandOutcome {
    fn empty() -> Self {
        Self {
            transition: None,
            initialized: None,
            opened_url: None,
        }
    }
}

#[derive(Debug, Default)]
struct FlowState {
    handoff: HandoffState,
    current_signer: Option<SignerId>,
    init_generation: u64,
}

pub struct BridgeOrchestrator<C, W, S, St, Ss, K>
where
    C: ConnectorPort,
    W: WidgetPort,
    S: SdkPort,
    St: StorePort,
    Ss: SessionStorePort,
    K: ClockPort,
{
    pub connector: C,
    pub widget: W,
    pub sdk: S,
    pub store: St,
    pub session: Ss,
    pub clock: K,
    config: BridgeConfig,
    flow: FlowState,
}

impl<C, W, S, St, Ss, K> BridgeOrchestrator<C, W, S, St, Ss, K>
where
    C: ConnectorPort,
    W: WidgetPort,
    S: SdkPort,
    St: StorePort,
    Ss: SessionStorePort,
    K: ClockPort,
{
    pub fn new(
        connector: C,
        widget: W,
        sdk: S,
        store: St,
        session: Ss,
        clock: K,
        config: BridgeConfig,
    ) -> Self {
        Self {
            connector,
            widget,
            sdk,
            store,
            session,
            clock,
            config,
            flow: FlowState::default(),
        }
    }

    pub fn handoff_state(&self) -> HandoffState {
        self.flow.handoff
    }

    pub fn handle(&mut self, command: BridgeCommand) -> Result<CommandOutcome, PortError> {
        match command {
            BridgeCommand::ConnectRequested => {
                let _ = self.connector.connect()?;
                Ok(CommandOutcome::empty())
            }
            BridgeCommand::DisconnectRequested => {
                let _ = self.connector.disconnect()?;
                self.reset_session()?;
                Ok(CommandOutcome::empty())
            }
            BridgeCommand::ConnectorStateChanged { state } => {
                let mut outcome = CommandOutcome::empty();
                if let Some(attempt) = self.begin_initialization(&state)? {
                    let result = self.sdk.initialize(&attempt.signer, &attempt.network);
                    outcome.initialized = self.complete_initialization(attempt, result)?;
                }
                Ok(outcome)
            }
            BridgeCommand::WireWidget => self.wire_widget(),
            BridgeCommand::Widget(event) => self.handle_widget_event(event),
        }
    }

    /// Evaluates the reactive rule for a connector snapshot. Returns an
    /// attempt only when the signer identity transitioned to a new present
    /// value AND a usable network resolved; a chain switch with an unchanged
    /// signer never produces one.
    pub fn begin_initialization(
        &mut self,
        state: &ConnectorState,
    ) -> Result<Option<InitAttempt>, PortError> {
        if state.signer_id == self.flow.current_signer {
            return Ok(None);
        }
        self.flow.current_signer = state.signer_id.clone();
        let Some(signer_id) = state.signer_id.clone() else {
            return Ok(None);
        };
        let signer = state.signer.clone().ok_or_else(|| {
            PortError::Validation(format!("connector reported signer id {signer_id} without a signer"))
        })?;

        let Some(network) = resolver::resolve(&self.config.networks, state.chain_id) else {
            // Every configured network is disabled: nothing to bootstrap.
            return Ok(None);
        };

        self.flow.init_generation = self.flow.init_generation.wrapping_add(1);
        Ok(Some(InitAttempt {
            generation: self.flow.init_generation,
            signer,
            network: network.clone(),
        }))
    }

    /// Applies a bootstrap completion. A stale attempt (superseded signer or
    /// intervening disconnect) is discarded whether it succeeded or failed;
    /// a current failure propagates to the caller and is fatal to this
    /// attempt only.
    pub fn complete_initialization(
        &mut self,
        attempt: InitAttempt,
        result: Result<(), PortError>,
    ) -> Result<Option<InitReceipt>, PortError> {
        let current = attempt.generation == self.flow.init_generation;
        if !current {
            return Ok(Some(InitReceipt {
                generation: attempt.generation,
                network: attempt.network,
                applied: false,
            }));
        }
        result?;
        self.store.dispatch(AppAction::NetworkSelected {
            network: attempt.network.clone(),
        })?;
        Ok(Some(InitReceipt {
            generation: attempt.generation,
            network: attempt.network,
            applied: true,
        }))
    }

    fn wire_widget(&mut self) -> Result<CommandOutcome, PortError> {
        let state = self.connector.state()?;
        // The widget snapshots its config at wiring time; wiring without a
        // signer identity would freeze an empty one in.
        if state.signer_id.is_none() {
            return Ok(CommandOutcome::empty());
        }
        let (next, transition) = self.flow.handoff.wire();
        self.flow.handoff = next;
        if transition.is_some() {
            let payload = HandoffPayload {
                config: self.config.widget.clone(),
                env: self.config.env.clone(),
                networks: self.config.networks.clone(),
                connector_state: state,
            };
            self.widget.push_handoff(&payload)?;
        }
        Ok(CommandOutcome {
            transition,
            initialized: None,
            opened_url: None,
        })
    }

    fn handle_widget_event(&mut self, event: WidgetEvent) -> Result<CommandOutcome, PortError> {
        match event {
            WidgetEvent::Ready => {
                if self.session.get(PROFILE_CACHE_KEY)?.is_none() {
                    self.store.dispatch(AppAction::LoadingCleared)?;
                }
                Ok(CommandOutcome::empty())
            }
            WidgetEvent::Login(doc) => self.handle_login(doc),
            WidgetEvent::Logout => {
                self.reset_session()?;
                Ok(CommandOutcome::empty())
            }
            WidgetEvent::MenuAction { event_name } => {
                if event_name == PROFILE_MENU_EVENT {
                    let url = self.profile_url()?;
                    return Ok(CommandOutcome {
                        transition: None,
                        initialized: None,
                        opened_url: Some(url),
                    });
                }
                Ok(CommandOutcome::empty())
            }
        }
    }

    fn handle_login(&mut self, doc: Value) -> Result<CommandOutcome, PortError> {
        let identity = Identity::parse(&doc)
            .map_err(|e| PortError::Validation(format!("login payload rejected: {e}")))?;

        let Some(association) = identity.network.clone() else {
            // An identity with no network association never touches the SDK
            // or the selected network.
            return Ok(CommandOutcome::empty());
        };

        let selected =
            resolver::resolve_by_name(&self.config.networks, &association.network).cloned();
        self.store
            .dispatch(AppAction::SdkInitialized { network: selected })?;

        let cache = AuthCache {
            created_at_ms: TimestampMs(self.clock.now_ms()?),
            raw: doc.clone(),
        };
        self.store.dispatch(AppAction::Authenticated {
            identity: identity.clone(),
            cache: Some(cache),
        })?;

        let selected_hub_address = identity.hubs.first().map(|hub| hub.address);
        self.store.dispatch(AppAction::HubUpdated {
            identity: identity.clone(),
            hubs: identity.hubs.clone(),
            selected_hub_address,
        })?;

        self.session.put(PROFILE_CACHE_KEY, &doc.to_string())?;
        self.store.dispatch(AppAction::LoadingCleared)?;
        Ok(CommandOutcome::empty())
    }

    /// The single reset path: store back to initial state wholesale,
    /// persisted session keys gone, pending bootstraps invalidated. An
    /// in-flight initialization is not cancelled; its completion will find
    /// a newer generation and be discarded.
    fn reset_session(&mut self) -> Result<(), PortError> {
        self.store.dispatch(AppAction::Reset)?;
        self.session.remove(AUTH_TOKEN_KEY)?;
        self.session.remove(PROFILE_CACHE_KEY)?;
        self.flow.current_signer = None;
        self.flow.init_generation = self.flow.init_generation.wrapping_add(1);
        Ok(())
    }

    fn profile_url(&self) -> Result<String, PortError> {
        let raw = self
            .session
            .get(PROFILE_CACHE_KEY)?
            .ok_or_else(|| PortError::NotFound("no cached profile document".to_owned()))?;
        let doc: Value = serde_json::from_str(&raw)
            .map_err(|e| PortError::Validation(format!("cached profile unreadable: {e}")))?;
        let name = doc
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| PortError::Validation("cached profile missing name".to_owned()))?;
        Ok(format!("{}{}", self.config.profile_base_url, name))
    }
}
