pub mod clock;
pub mod config;
pub mod connector;
pub mod layout;
pub mod sdk;
pub mod session_store;
pub mod store;
pub mod widget;

pub use clock::SystemClockAdapter;
pub use config::{BridgeAdapterConfig, RuntimeProfile};
pub use connector::WalletConnectorAdapter;
pub use layout::FixedLayoutAdapter;
pub use sdk::{SdkBootstrap, SdkClientAdapter};
pub use session_store::SessionStoreAdapter;
pub use store::MemoryStoreAdapter;
pub use widget::WidgetHostAdapter;
