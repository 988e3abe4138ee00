//! Per-kind adapter configuration: canonical defaults and overlay merge.
//!
//! There are exactly four transport kinds. Each is a concrete struct whose
//! `Default` impl carries the canonical defaults, paired with an
//! all-`Option` overlay struct for partial user input. Merging is a
//! shallow, field-by-field overlay: a `Some` overwrites the default, a
//! `None` keeps it. Because the field set is fixed by the struct, merging
//! can never introduce or drop fields, and applying the same overlay twice
//! is a no-op after the first application.
//!
//! The wire spelling of every field is camelCase (`messagePostFormat`,
//! `enableCors`, …), fixed by the configuration file format.

use serde::{Deserialize, Serialize};

/// Common seam over the four adapter config kinds.
///
/// Kinds are a closed set: each maps explicitly to its default object and
/// merge function. There is no dynamic lookup by kind name — an unknown
/// kind cannot be constructed.
pub trait AdapterConfig: Default + Clone {
    /// Partial user input for this kind.
    type Overlay;

    /// Transport kind tag carried in the `name` field.
    const KIND: &'static str;

    /// Overlays `overlay` onto `self`, field by field.
    fn apply(&mut self, overlay: &Self::Overlay);

    /// Merges `overlay` onto the canonical default.
    fn merged(overlay: &Self::Overlay) -> Self {
        let mut config = Self::default();
        config.apply(overlay);
        config
    }
}

// =============================================================================
// http-server
// =============================================================================

/// Configuration for one HTTP server adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpServerConfig {
    /// Transport kind tag.
    pub name: String,
    /// Whether this adapter is enabled.
    pub enable: bool,
    /// Listen port.
    pub port: u16,
    /// Bind address.
    pub host: String,
    /// Whether to answer CORS preflight requests.
    pub enable_cors: bool,
    /// Whether to accept WebSocket upgrades on the same port.
    pub enable_websocket: bool,
    /// Outbound message format: "array" or "string".
    pub message_post_format: String,
    /// Whether the bot's own messages are reported back.
    pub report_self_message: bool,
    /// Access token required from callers.
    pub token: String,
    /// Per-adapter debug logging.
    pub debug: bool,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            name: Self::KIND.to_string(),
            enable: false,
            port: 3000,
            host: "0.0.0.0".to_string(),
            enable_cors: true,
            enable_websocket: true,
            message_post_format: "array".to_string(),
            report_self_message: false,
            token: String::new(),
            debug: false,
        }
    }
}

/// Partial user input for [`HttpServerConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpServerOverlay {
    pub enable: Option<bool>,
    pub port: Option<u16>,
    pub host: Option<String>,
    pub enable_cors: Option<bool>,
    pub enable_websocket: Option<bool>,
    pub message_post_format: Option<String>,
    pub report_self_message: Option<bool>,
    pub token: Option<String>,
    pub debug: Option<bool>,
}

impl AdapterConfig for HttpServerConfig {
    type Overlay = HttpServerOverlay;

    const KIND: &'static str = "http-server";

    fn apply(&mut self, overlay: &Self::Overlay) {
        if let Some(v) = overlay.enable {
            self.enable = v;
        }
        if let Some(v) = overlay.port {
            self.port = v;
        }
        if let Some(ref v) = overlay.host {
            self.host = v.clone();
        }
        if let Some(v) = overlay.enable_cors {
            self.enable_cors = v;
        }
        if let Some(v) = overlay.enable_websocket {
            self.enable_websocket = v;
        }
        if let Some(ref v) = overlay.message_post_format {
            self.message_post_format = v.clone();
        }
        if let Some(v) = overlay.report_self_message {
            self.report_self_message = v;
        }
        if let Some(ref v) = overlay.token {
            self.token = v.clone();
        }
        if let Some(v) = overlay.debug {
            self.debug = v;
        }
    }
}

// =============================================================================
// http-client
// =============================================================================

/// Configuration for one HTTP client adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpClientConfig {
    /// Transport kind tag.
    pub name: String,
    /// Whether this adapter is enabled.
    pub enable: bool,
    /// Endpoint events are posted to.
    pub url: String,
    /// Outbound message format: "array" or "string".
    pub message_post_format: String,
    /// Whether the bot's own messages are reported back.
    pub report_self_message: bool,
    /// Access token sent with requests.
    pub token: String,
    /// Per-adapter debug logging.
    pub debug: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            name: Self::KIND.to_string(),
            enable: false,
            url: "http://localhost:8080".to_string(),
            message_post_format: "array".to_string(),
            report_self_message: false,
            token: String::new(),
            debug: false,
        }
    }
}

/// Partial user input for [`HttpClientConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpClientOverlay {
    pub enable: Option<bool>,
    pub url: Option<String>,
    pub message_post_format: Option<String>,
    pub report_self_message: Option<bool>,
    pub token: Option<String>,
    pub debug: Option<bool>,
}

impl AdapterConfig for HttpClientConfig {
    type Overlay = HttpClientOverlay;

    const KIND: &'static str = "http-client";

    fn apply(&mut self, overlay: &Self::Overlay) {
        if let Some(v) = overlay.enable {
            self.enable = v;
        }
        if let Some(ref v) = overlay.url {
            self.url = v.clone();
        }
        if let Some(ref v) = overlay.message_post_format {
            self.message_post_format = v.clone();
        }
        if let Some(v) = overlay.report_self_message {
            self.report_self_message = v;
        }
        if let Some(ref v) = overlay.token {
            self.token = v.clone();
        }
        if let Some(v) = overlay.debug {
            self.debug = v;
        }
    }
}

// =============================================================================
// websocket-server
// =============================================================================

/// Configuration for one WebSocket server adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebsocketServerConfig {
    /// Transport kind tag.
    pub name: String,
    /// Whether this adapter is enabled.
    pub enable: bool,
    /// Bind address.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Outbound message format: "array" or "string".
    pub message_post_format: String,
    /// Whether the bot's own messages are reported back.
    pub report_self_message: bool,
    /// Access token required from callers.
    pub token: String,
    /// Whether events are pushed to connected clients.
    pub enable_push_event: bool,
    /// Per-adapter debug logging.
    pub debug: bool,
    /// Heartbeat interval in milliseconds, 0 to disable.
    pub heart_interval: u64,
}

impl Default for WebsocketServerConfig {
    fn default() -> Self {
        Self {
            name: Self::KIND.to_string(),
            enable: false,
            host: "0.0.0.0".to_string(),
            port: 3002,
            message_post_format: "array".to_string(),
            report_self_message: false,
            token: String::new(),
            enable_push_event: true,
            debug: false,
            heart_interval: 0,
        }
    }
}

/// Partial user input for [`WebsocketServerConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebsocketServerOverlay {
    pub enable: Option<bool>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub message_post_format: Option<String>,
    pub report_self_message: Option<bool>,
    pub token: Option<String>,
    pub enable_push_event: Option<bool>,
    pub debug: Option<bool>,
    pub heart_interval: Option<u64>,
}

impl AdapterConfig for WebsocketServerConfig {
    type Overlay = WebsocketServerOverlay;

    const KIND: &'static str = "websocket-server";

    fn apply(&mut self, overlay: &Self::Overlay) {
        if let Some(v) = overlay.enable {
            self.enable = v;
        }
        if let Some(ref v) = overlay.host {
            self.host = v.clone();
        }
        if let Some(v) = overlay.port {
            self.port = v;
        }
        if let Some(ref v) = overlay.message_post_format {
            self.message_post_format = v.clone();
        }
        if let Some(v) = overlay.report_self_message {
            self.report_self_message = v;
        }
        if let Some(ref v) = overlay.token {
            self.token = v.clone();
        }
        if let Some(v) = overlay.enable_push_event {
            self.enable_push_event = v;
        }
        if let Some(v) = overlay.debug {
            self.debug = v;
        }
        if let Some(v) = overlay.heart_interval {
            self.heart_interval = v;
        }
    }
}

// =============================================================================
// websocket-client
// =============================================================================

/// Configuration for one WebSocket client (reverse WS) adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebsocketClientConfig {
    /// Transport kind tag.
    pub name: String,
    /// Whether this adapter is enabled.
    pub enable: bool,
    /// WebSocket URL to connect to.
    pub url: String,
    /// Outbound message format: "array" or "string".
    pub message_post_format: String,
    /// Whether the bot's own messages are reported back.
    pub report_self_message: bool,
    /// Access token sent on connect.
    pub token: String,
    /// Per-adapter debug logging.
    pub debug: bool,
    /// Heartbeat interval in milliseconds, 0 to disable.
    pub heart_interval: u64,
}

impl Default for WebsocketClientConfig {
    fn default() -> Self {
        Self {
            name: Self::KIND.to_string(),
            enable: false,
            url: "ws://localhost:8082".to_string(),
            message_post_format: "array".to_string(),
            report_self_message: false,
            token: String::new(),
            debug: false,
            heart_interval: 0,
        }
    }
}

/// Partial user input for [`WebsocketClientConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebsocketClientOverlay {
    pub enable: Option<bool>,
    pub url: Option<String>,
    pub message_post_format: Option<String>,
    pub report_self_message: Option<bool>,
    pub token: Option<String>,
    pub debug: Option<bool>,
    pub heart_interval: Option<u64>,
}

impl AdapterConfig for WebsocketClientConfig {
    type Overlay = WebsocketClientOverlay;

    const KIND: &'static str = "websocket-client";

    fn apply(&mut self, overlay: &Self::Overlay) {
        if let Some(v) = overlay.enable {
            self.enable = v;
        }
        if let Some(ref v) = overlay.url {
            self.url = v.clone();
        }
        if let Some(ref v) = overlay.message_post_format {
            self.message_post_format = v.clone();
        }
        if let Some(v) = overlay.report_self_message {
            self.report_self_message = v;
        }
        if let Some(ref v) = overlay.token {
            self.token = v.clone();
        }
        if let Some(v) = overlay.debug {
            self.debug = v;
        }
        if let Some(v) = overlay.heart_interval {
            self.heart_interval = v;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_overlay_fields_keep_defaults() {
        let overlay = HttpServerOverlay {
            port: Some(6700),
            token: Some("secret".to_string()),
            ..Default::default()
        };
        let config = HttpServerConfig::merged(&overlay);

        assert_eq!(config.port, 6700);
        assert_eq!(config.token, "secret");
        // Untouched fields retain the canonical defaults.
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.enable_cors);
        assert!(config.enable_websocket);
        assert_eq!(config.message_post_format, "array");
        assert_eq!(config.name, "http-server");
    }

    #[test]
    fn merge_is_idempotent() {
        let overlay = WebsocketClientOverlay {
            enable: Some(true),
            url: Some("ws://example.invalid/ws".to_string()),
            heart_interval: Some(5000),
            ..Default::default()
        };

        let once = WebsocketClientConfig::merged(&overlay);
        let mut twice = once.clone();
        twice.apply(&overlay);

        assert_eq!(once, twice);
    }

    #[test]
    fn empty_overlay_yields_the_default() {
        assert_eq!(
            WebsocketServerConfig::merged(&WebsocketServerOverlay::default()),
            WebsocketServerConfig::default()
        );
        assert_eq!(
            HttpClientConfig::merged(&HttpClientOverlay::default()),
            HttpClientConfig::default()
        );
    }

    #[test]
    fn overlay_deserialization_uses_camel_case_and_ignores_unknown_keys() {
        let overlay: WebsocketServerOverlay = serde_json::from_value(serde_json::json!({
            "messagePostFormat": "string",
            "heartInterval": 30000,
            "someFutureKnob": true
        }))
        .unwrap();

        let config = WebsocketServerConfig::merged(&overlay);
        assert_eq!(config.message_post_format, "string");
        assert_eq!(config.heart_interval, 30000);
    }

    #[test]
    fn serialized_config_spells_fields_in_camel_case() {
        let value = serde_json::to_value(HttpServerConfig::default()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["name"], "http-server");
        assert!(object.contains_key("enableCors"));
        assert!(object.contains_key("enableWebsocket"));
        assert!(object.contains_key("messagePostFormat"));
        assert!(object.contains_key("reportSelfMessage"));
    }
}
