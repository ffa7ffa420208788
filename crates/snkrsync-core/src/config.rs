//! Endpoint configuration for the tracking API and scrape channel.
//!
//! The original client hard-coded its endpoints; here they are plain serde
//! structs the embedding application fills in (from its own config file,
//! environment, or build settings).

use serde::{Deserialize, Serialize};

/// REST API endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the tracking API, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://localhost".to_string()
}

/// Scrape channel (WebSocket) endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Full ws:// or wss:// URL of the scrape channel
    #[serde(default = "default_channel_url")]
    pub url: String,
    /// Connect handshake timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            url: default_channel_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_channel_url() -> String {
    "wss://localhost/ws/scrape/".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: ChannelConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.url, "wss://localhost/ws/scrape/");
        assert_eq!(config.connect_timeout_secs, 10);
    }
}
