//! The network configuration aggregate and the v2 merge path.
//!
//! A [`NetworkConfig`] holds one ordered list per transport kind; the
//! [`OneBotConfig`] aggregate adds the process-wide settings. The
//! aggregate is built exactly once at startup — via
//! [`merge_onebot_config`] for current-format input or via the legacy
//! migrator — and is immutable for the lifetime of the process.

use serde::{Deserialize, Serialize};

use super::adapter::{
    AdapterConfig, HttpClientConfig, HttpClientOverlay, HttpServerConfig, HttpServerOverlay,
    WebsocketClientConfig, WebsocketClientOverlay, WebsocketServerConfig, WebsocketServerOverlay,
};

/// Ordered adapter lists, one per transport kind.
///
/// Order is significant: it is preserved as given by the user, and the
/// first entry of a list may be treated specially (the legacy migrator
/// applies a single heartbeat override to the first websocket server).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkConfig {
    /// HTTP server adapters.
    pub http_servers: Vec<HttpServerConfig>,
    /// HTTP client adapters.
    pub http_clients: Vec<HttpClientConfig>,
    /// WebSocket server adapters.
    pub websocket_servers: Vec<WebsocketServerConfig>,
    /// WebSocket client (reverse WS) adapters.
    pub websocket_clients: Vec<WebsocketClientConfig>,
}

/// The full configuration aggregate handed to the transport layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OneBotConfig {
    /// Per-kind adapter lists.
    pub network: NetworkConfig,
    /// Music signing service URL, empty to disable.
    pub music_sign_url: String,
    /// Whether local files are rewritten to URLs.
    pub enable_local_file2_url: bool,
}

/// Partial user input in the current (v2) format.
///
/// Anything the user omits falls back to the defaults; anything beyond
/// this shape is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserConfig {
    /// Per-kind adapter overlay lists.
    pub network: Option<NetworkOverlay>,
    /// Music signing service URL; only a present value overwrites.
    pub music_sign_url: Option<String>,
}

/// Partial per-kind adapter lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkOverlay {
    pub http_servers: Option<Vec<HttpServerOverlay>>,
    pub http_clients: Option<Vec<HttpClientOverlay>>,
    pub websocket_servers: Option<Vec<WebsocketServerOverlay>>,
    pub websocket_clients: Option<Vec<WebsocketClientOverlay>>,
}

/// Merges user-supplied (v2) configuration onto the global defaults.
///
/// Each supplied adapter list replaces the default empty list, with every
/// element individually merged onto its kind's default, so the aggregate
/// never contains a partially-defaulted adapter. Kinds the user omits stay
/// empty. `musicSignUrl` overwrites only when present in the input.
pub fn merge_onebot_config(user: &UserConfig) -> OneBotConfig {
    let mut config = OneBotConfig::default();

    if let Some(network) = &user.network {
        if let Some(list) = &network.http_servers {
            config.network.http_servers = list.iter().map(HttpServerConfig::merged).collect();
        }
        if let Some(list) = &network.http_clients {
            config.network.http_clients = list.iter().map(HttpClientConfig::merged).collect();
        }
        if let Some(list) = &network.websocket_servers {
            config.network.websocket_servers =
                list.iter().map(WebsocketServerConfig::merged).collect();
        }
        if let Some(list) = &network.websocket_clients {
            config.network.websocket_clients =
                list.iter().map(WebsocketClientConfig::merged).collect();
        }
    }

    if let Some(url) = &user.music_sign_url {
        config.music_sign_url.clone_from(url);
    }

    config
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn user_config(value: serde_json::Value) -> UserConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_input_yields_the_global_defaults() {
        let config = merge_onebot_config(&UserConfig::default());
        assert_eq!(config, OneBotConfig::default());
        assert!(config.network.http_servers.is_empty());
        assert_eq!(config.music_sign_url, "");
        assert!(!config.enable_local_file2_url);
    }

    #[test]
    fn supplied_lists_are_merged_element_wise() {
        let user = user_config(json!({
            "network": {
                "httpServers": [
                    { "enable": true, "port": 3100 },
                    { "port": 3200, "token": "second" }
                ]
            }
        }));

        let config = merge_onebot_config(&user);
        assert_eq!(config.network.http_servers.len(), 2);

        let first = &config.network.http_servers[0];
        assert!(first.enable);
        assert_eq!(first.port, 3100);
        assert_eq!(first.host, "0.0.0.0");

        let second = &config.network.http_servers[1];
        assert!(!second.enable);
        assert_eq!(second.port, 3200);
        assert_eq!(second.token, "second");

        // Kinds the user omitted stay empty.
        assert!(config.network.websocket_servers.is_empty());
        assert!(config.network.websocket_clients.is_empty());
        assert!(config.network.http_clients.is_empty());
    }

    #[test]
    fn list_order_is_preserved() {
        let user = user_config(json!({
            "network": {
                "websocketClients": [
                    { "url": "ws://a" },
                    { "url": "ws://b" },
                    { "url": "ws://c" }
                ]
            }
        }));

        let config = merge_onebot_config(&user);
        let urls: Vec<&str> = config
            .network
            .websocket_clients
            .iter()
            .map(|c| c.url.as_str())
            .collect();
        assert_eq!(urls, ["ws://a", "ws://b", "ws://c"]);
    }

    #[test]
    fn music_sign_url_overwrites_only_when_present() {
        let with_url = merge_onebot_config(&user_config(json!({
            "musicSignUrl": "https://sign.example"
        })));
        assert_eq!(with_url.music_sign_url, "https://sign.example");

        let without = merge_onebot_config(&user_config(json!({})));
        assert_eq!(without.music_sign_url, "");
    }

    #[test]
    fn aggregate_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(OneBotConfig::default()).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("network"));
        assert!(object.contains_key("musicSignUrl"));
        assert!(object.contains_key("enableLocalFile2Url"));

        let network = object["network"].as_object().unwrap();
        assert!(network.contains_key("httpServers"));
        assert!(network.contains_key("httpClients"));
        assert!(network.contains_key("websocketServers"));
        assert!(network.contains_key("websocketClients"));
    }
}
