//! hublink: wallet-connection bridge for the hub platform front-end.

use hublink_bridge_adapters::BridgeAdapterConfig;

mod runtime;

fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!(
        git = env!("GIT_HASH"),
        built = env!("BUILD_TIME"),
        "starting hublink"
    );

    let config = BridgeAdapterConfig::from_env();
    let pump = runtime::BridgePump::from_config(&config)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(pump.run())
}
