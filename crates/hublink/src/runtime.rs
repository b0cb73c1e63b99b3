//! Cooperative event pump wiring the adapters into the orchestrator.
//! This must remain the only shell-facing boundary for bridge operations.

use std::time::Duration;

use hublink_bridge_adapters::{
    BridgeAdapterConfig, FixedLayoutAdapter, MemoryStoreAdapter, SdkClientAdapter,
    SessionStoreAdapter, SystemClockAdapter, WalletConnectorAdapter, WidgetHostAdapter,
};
use hublink_bridge_core::{
    BridgeCommand, BridgeOrchestrator, CommandOutcome, ConnectorPort, HandoffState, PositionSync,
    SyncOutcome, WidgetEventBridge,
};

type ShellOrchestrator = BridgeOrchestrator<
    WalletConnectorAdapter,
    WidgetHostAdapter,
    SdkClientAdapter,
    MemoryStoreAdapter,
    SessionStoreAdapter,
    SystemClockAdapter,
>;

pub struct BridgePump {
    orchestrator: ShellOrchestrator,
    connector: WalletConnectorAdapter,
    event_bridge: WidgetEventBridge<WidgetHostAdapter>,
    position_sync: PositionSync<WidgetHostAdapter, FixedLayoutAdapter, SystemClockAdapter>,
    tick: Duration,
}

impl BridgePump {
    pub fn from_config(config: &BridgeAdapterConfig) -> eyre::Result<Self> {
        let connector = WalletConnectorAdapter::with_config(config);
        let widget = WidgetHostAdapter::default();
        let sdk = SdkClientAdapter::with_config(config);
        let store = MemoryStoreAdapter::default();
        let session = SessionStoreAdapter::default();

        let orchestrator = BridgeOrchestrator::new(
            connector.clone(),
            widget.clone(),
            sdk,
            store,
            session,
            SystemClockAdapter,
            config.bridge_config(),
        );

        let mut event_bridge = WidgetEventBridge::new(widget.clone());
        event_bridge.attach()?;

        let position_sync = PositionSync::new(
            widget,
            FixedLayoutAdapter::default(),
            SystemClockAdapter,
            config.position_debounce_ms,
        );

        Ok(Self {
            orchestrator,
            connector,
            event_bridge,
            position_sync,
            tick: Duration::from_millis(config.pump_tick_ms),
        })
    }

    pub async fn run(mut self) -> eyre::Result<()> {
        self.dispatch(BridgeCommand::ConnectRequested);
        if let SyncOutcome::Applied(rect) = self.position_sync.on_mount()? {
            tracing::debug!(left = rect.left, top = rect.top, "widget placed");
        }

        let mut ticker = tokio::time::interval(self.tick);
        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => break,
                _ = ticker.tick() => self.pump_once(),
            }
        }
        self.shutdown()
    }

    fn pump_once(&mut self) {
        match self.connector.drain_events() {
            Ok(events) => {
                for event in events {
                    tracing::debug!(sequence = event.sequence, kind = ?event.kind, "connector event");
                    self.dispatch(BridgeCommand::ConnectorStateChanged { state: event.state });
                }
            }
            Err(e) => tracing::warn!(error = %e, "connector event drain failed"),
        }

        if self.orchestrator.handoff_state() == HandoffState::NotWired {
            self.dispatch(BridgeCommand::WireWidget);
        }

        match self.event_bridge.poll() {
            Ok(events) => {
                for event in events {
                    self.dispatch(BridgeCommand::Widget(event));
                }
            }
            Err(e) => tracing::warn!(error = %e, "widget event poll failed"),
        }

        match self.position_sync.on_resize() {
            Ok(SyncOutcome::WidgetMissing) => {
                tracing::debug!("widget not on the page yet; retrying next tick");
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "position sync failed"),
        }
    }

    /// One command through the orchestrator. Command-level failures are
    /// surfaced in the log and do not stop the pump.
    fn dispatch(&mut self, command: BridgeCommand) {
        match self.orchestrator.handle(command) {
            Ok(outcome) => self.apply_outcome(outcome),
            Err(e) => tracing::warn!(error = %e, "bridge command failed"),
        }
    }

    fn apply_outcome(&mut self, outcome: CommandOutcome) {
        if let Some(transition) = outcome.transition {
            tracing::info!(
                from = transition.from,
                to = transition.to,
                reason = transition.reason,
                "bridge transition"
            );
        }
        if let Some(receipt) = outcome.initialized {
            if receipt.applied {
                tracing::info!(
                    network = %receipt.network.network,
                    generation = receipt.generation,
                    "sdk bootstrap applied"
                );
            } else {
                tracing::warn!(
                    network = %receipt.network.network,
                    generation = receipt.generation,
                    "stale sdk bootstrap discarded"
                );
            }
        }
        if let Some(url) = outcome.opened_url {
            match open::that(&url) {
                Ok(()) => tracing::info!(%url, "opened profile"),
                Err(e) => tracing::warn!(%url, error = %e, "failed to open profile"),
            }
        }
    }

    fn shutdown(mut self) -> eyre::Result<()> {
        self.event_bridge.detach()?;
        self.position_sync.teardown()?;
        tracing::info!("hublink stopped");
        Ok(())
    }
}
