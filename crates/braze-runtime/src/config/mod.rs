//! Configuration module for the Braze runtime.
//!
//! Owns the adapter default/merge model, the network configuration
//! aggregate, the legacy (v1) migrator, the figment-based loader, and the
//! post-merge validation pass.

pub mod adapter;
pub mod error;
pub mod legacy;
pub mod loader;
pub mod network;
pub mod validation;

pub use adapter::{
    AdapterConfig, HttpClientConfig, HttpClientOverlay, HttpServerConfig, HttpServerOverlay,
    WebsocketClientConfig, WebsocketClientOverlay, WebsocketServerConfig, WebsocketServerOverlay,
};
pub use error::{ConfigError, ConfigResult};
pub use legacy::{V1Config, V1Http, V1ReverseWs, V1Ws, migrate_v1_config};
pub use loader::{ConfigLoader, Profile, build_onebot_config};
pub use network::{NetworkConfig, NetworkOverlay, OneBotConfig, UserConfig, merge_onebot_config};
pub use validation::validate_config;
