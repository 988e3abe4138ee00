//! Migration from the legacy (v1) single-adapter configuration format.
//!
//! The v1 format had at most one adapter per kind (`http`, `ws`,
//! `reverseWs`) and a single token/heartbeat pair shared across all
//! transports. Migration runs once, at load, and produces the same
//! aggregate the v2 merge path does; the v1 shape is never persisted
//! again.
//!
//! Two v1 quirks are preserved deliberately:
//!
//! - The `http` adapter's token comes from `http.secret`, but the `ws`
//!   and `reverseWs` adapters take the **top-level** `token` — there is no
//!   per-protocol WS secret in v1.
//! - A top-level `heartInterval` applies to the first websocket server
//!   only.
//!
//! Malformed legacy input (`reverseWs` without `urls`, `heartInterval`
//! without a `ws` section) fails migration; the error is fatal at startup.

use serde::Deserialize;

use super::adapter::{
    AdapterConfig, HttpServerConfig, HttpServerOverlay, WebsocketClientConfig,
    WebsocketClientOverlay, WebsocketServerConfig, WebsocketServerOverlay,
};
use super::error::{ConfigError, ConfigResult};
use super::network::OneBotConfig;

/// The legacy (v1) configuration shape. Read-only migration input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct V1Config {
    /// Legacy HTTP server section.
    pub http: Option<V1Http>,
    /// Legacy WebSocket server section.
    pub ws: Option<V1Ws>,
    /// Legacy reverse WebSocket section.
    pub reverse_ws: Option<V1ReverseWs>,
    /// Debug logging, shared across all transports.
    pub debug: Option<bool>,
    /// Heartbeat interval in milliseconds, shared across all transports.
    pub heart_interval: Option<u64>,
    /// Outbound message format, shared across all transports.
    pub message_post_format: Option<String>,
    /// Whether local files are rewritten to URLs.
    pub enable_local_file2_url: Option<bool>,
    /// Music signing service URL.
    pub music_sign_url: Option<String>,
    /// Whether the bot's own messages are reported back.
    pub report_self_message: Option<bool>,
    /// Access token shared by the WS transports.
    pub token: Option<String>,
}

/// Legacy HTTP server section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct V1Http {
    pub enable: Option<bool>,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// HTTP-specific access secret; becomes the http-server token.
    pub secret: Option<String>,
    /// Legacy heartbeat toggle; superseded by `heartInterval`.
    pub enable_heart: Option<bool>,
    /// Legacy event-post toggle; the post targets moved to http clients.
    pub enable_post: Option<bool>,
    /// Legacy event-post targets.
    pub post_urls: Option<Vec<String>>,
}

/// Legacy WebSocket server section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct V1Ws {
    pub enable: Option<bool>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Legacy reverse WebSocket section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct V1ReverseWs {
    pub enable: Option<bool>,
    /// One websocket-client adapter is produced per URL.
    pub urls: Option<Vec<String>>,
}

/// Transforms a legacy configuration into the multi-adapter aggregate.
///
/// Sections absent from `v1` leave the corresponding adapter list empty.
///
/// # Errors
///
/// Returns [`ConfigError::MigrationError`] when `reverseWs` is present
/// without `urls`, or when `heartInterval` is set with no websocket
/// server to apply it to.
pub fn migrate_v1_config(v1: &V1Config) -> ConfigResult<OneBotConfig> {
    let mut config = OneBotConfig::default();

    if let Some(http) = &v1.http {
        config.network.http_servers = vec![HttpServerConfig::merged(&HttpServerOverlay {
            enable: http.enable,
            port: http.port,
            host: http.host.clone(),
            token: http.secret.clone(),
            debug: v1.debug,
            message_post_format: v1.message_post_format.clone(),
            report_self_message: v1.report_self_message,
            ..Default::default()
        })];
    }

    if let Some(ws) = &v1.ws {
        config.network.websocket_servers =
            vec![WebsocketServerConfig::merged(&WebsocketServerOverlay {
                enable: ws.enable,
                port: ws.port,
                host: ws.host.clone(),
                // v1 has no per-protocol WS secret; the shared top-level
                // token applies.
                token: v1.token.clone(),
                debug: v1.debug,
                message_post_format: v1.message_post_format.clone(),
                report_self_message: v1.report_self_message,
                ..Default::default()
            })];
    }

    if let Some(reverse_ws) = &v1.reverse_ws {
        let urls = reverse_ws
            .urls
            .as_ref()
            .ok_or_else(|| ConfigError::migration("reverseWs is present but reverseWs.urls is missing"))?;
        config.network.websocket_clients = urls
            .iter()
            .map(|url| {
                WebsocketClientConfig::merged(&WebsocketClientOverlay {
                    enable: reverse_ws.enable,
                    url: Some(url.clone()),
                    token: v1.token.clone(),
                    debug: v1.debug,
                    message_post_format: v1.message_post_format.clone(),
                    report_self_message: v1.report_self_message,
                    ..Default::default()
                })
            })
            .collect();
    }

    if let Some(interval) = v1.heart_interval.filter(|i| *i > 0) {
        let first = config.network.websocket_servers.first_mut().ok_or_else(|| {
            ConfigError::migration(
                "heartInterval is set but there is no websocket server to apply it to \
                 (legacy ws section is missing)",
            )
        })?;
        first.heart_interval = interval;
    }

    if let Some(url) = v1.music_sign_url.as_ref().filter(|u| !u.is_empty()) {
        config.music_sign_url.clone_from(url);
    }
    if v1.enable_local_file2_url.unwrap_or(false) {
        config.enable_local_file2_url = true;
    }

    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
