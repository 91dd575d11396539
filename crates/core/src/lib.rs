pub mod config;
pub mod config_loader;
pub mod snapshot;
pub mod traits;

pub use config::{AppConfig, HyperliquidConfig, RadarConfig, ServerConfig};
pub use config_loader::ConfigLoader;
pub use snapshot::{AssetCtx, AssetMeta, MarketSnapshot, Meta};
pub use traits::SnapshotSource;
