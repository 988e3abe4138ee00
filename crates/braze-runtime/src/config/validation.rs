//! Post-merge configuration validation.
//!
//! Runs over the fully-defaulted aggregate, after merge or migration and
//! before any adapter starts. Failures are fatal to startup.

use super::error::{ConfigError, ConfigResult};
use super::network::OneBotConfig;

const POST_FORMATS: &[&str] = &["array", "string"];

/// Validates the merged configuration aggregate.
pub fn validate_config(config: &OneBotConfig) -> ConfigResult<()> {
    for server in &config.network.http_servers {
        validate_port("http-server", server.port)?;
        validate_post_format(&server.message_post_format)?;
    }
    for client in &config.network.http_clients {
        validate_url(&client.url, &["http://", "https://"])?;
        validate_post_format(&client.message_post_format)?;
    }
    for server in &config.network.websocket_servers {
        validate_port("websocket-server", server.port)?;
        validate_post_format(&server.message_post_format)?;
    }
    for client in &config.network.websocket_clients {
        validate_url(&client.url, &["ws://", "wss://"])?;
        validate_post_format(&client.message_post_format)?;
    }
    Ok(())
}

fn validate_port(adapter: &'static str, port: u16) -> ConfigResult<()> {
    if port == 0 {
        return Err(ConfigError::InvalidPort { adapter, port });
    }
    Ok(())
}

fn validate_url(url: &str, schemes: &[&str]) -> ConfigResult<()> {
    if url.is_empty() {
        return Err(ConfigError::invalid_url(url, "URL must not be empty"));
    }
    if !schemes.iter().any(|s| url.starts_with(s)) {
        return Err(ConfigError::invalid_url(
            url,
            format!("URL must start with one of: {schemes:?}"),
        ));
    }
    Ok(())
}

fn validate_post_format(format: &str) -> ConfigResult<()> {
    if !POST_FORMATS.contains(&format) {
        return Err(ConfigError::validation(format!(
            "Invalid messagePostFormat: {format}. Valid values are: {POST_FORMATS:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::adapter::{
        AdapterConfig, HttpClientConfig, HttpClientOverlay, WebsocketServerConfig,
        WebsocketServerOverlay,
    };
    use super::*;

    #[test]
    fn default_aggregate_is_valid() {
        assert!(validate_config(&OneBotConfig::default()).is_ok());
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut config = OneBotConfig::default();
        config.network.websocket_servers =
            vec![WebsocketServerConfig::merged(&WebsocketServerOverlay {
                port: Some(0),
                ..Default::default()
            })];

        let err = validate_config(&config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPort {
                adapter: "websocket-server",
                port: 0
            }
        ));
    }

    #[test]
    fn wrong_url_scheme_is_rejected() {
        let mut config = OneBotConfig::default();
        config.network.http_clients = vec![HttpClientConfig::merged(&HttpClientOverlay {
            url: Some("ws://not-http".to_string()),
            ..Default::default()
        })];

        assert!(matches!(
            validate_config(&config).unwrap_err(),
            ConfigError::InvalidUrl { .. }
        ));
    }

    #[test]
    fn unknown_post_format_is_rejected() {
        let mut config = OneBotConfig::default();
        config.network.websocket_servers =
            vec![WebsocketServerConfig::merged(&WebsocketServerOverlay {
                message_post_format: Some("cbor".to_string()),
                ..Default::default()
            })];

        assert!(matches!(
            validate_config(&config).unwrap_err(),
            ConfigError::ValidationError { .. }
        ));
    }
}
