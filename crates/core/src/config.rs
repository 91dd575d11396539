use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub hyperliquid: HyperliquidConfig,
    pub radar: RadarConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HyperliquidConfig {
    pub api_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarConfig {
    /// Builder address attached to every signals response.
    pub builder_address: String,
    /// Seconds between snapshot refreshes.
    pub refresh_interval_secs: u64,
    /// Maximum number of ranked signals to publish.
    pub top_n: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            hyperliquid: HyperliquidConfig {
                api_url: "https://api.hyperliquid.xyz".to_string(),
            },
            radar: RadarConfig {
                builder_address: "0x78c04383dcE7376f5baE0282E8c759486d94AB55".to_string(),
                refresh_interval_secs: 30,
                top_n: 20,
            },
        }
    }
}
