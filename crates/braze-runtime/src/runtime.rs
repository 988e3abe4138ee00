//! The bridge runtime facade.
//!
//! [`BridgeRuntime`] ties the startup sequence together: load (or accept)
//! a configuration, validate it, assemble the action registry, and expose
//! the dispatch boundary. Everything it holds is immutable after
//! `build()`; transports share it read-only.
//!
//! # Example
//!
//! ```rust,ignore
//! use braze_runtime::BridgeRuntime;
//!
//! let runtime = BridgeRuntime::builder()
//!     .config_file("./onebot.json")
//!     .actions(|registry| my_actions::register_all(registry))
//!     .build()?;
//!
//! // Hand `runtime.config()` to the transport layer; each transport
//! // funnels invocations through `runtime.dispatch_envelope(...)`.
//! ```

use serde_json::Value;
use tracing::info;

use braze_core::{ActionRegistry, InvocationEnvelope, RegistryResult, ResultEnvelope};

use crate::config::{ConfigLoader, OneBotConfig, validate_config};
use crate::error::RuntimeResult;

type SetupFn = Box<dyn FnOnce(&mut ActionRegistry) -> RegistryResult<()>>;

/// The assembled bridge: immutable configuration plus action registry.
pub struct BridgeRuntime {
    config: OneBotConfig,
    registry: ActionRegistry,
}

impl BridgeRuntime {
    /// Creates a runtime builder.
    pub fn builder() -> BridgeRuntimeBuilder {
        BridgeRuntimeBuilder::default()
    }

    /// Returns the configuration aggregate for the transport layer.
    pub fn config(&self) -> &OneBotConfig {
        &self.config
    }

    /// Returns the action registry.
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Dispatches a raw invocation.
    pub async fn dispatch(&self, action: &str, params: Value) -> ResultEnvelope {
        self.registry.dispatch(action, params).await
    }

    /// Dispatches an invocation envelope.
    pub async fn dispatch_envelope(&self, envelope: InvocationEnvelope) -> ResultEnvelope {
        self.registry.dispatch_envelope(envelope).await
    }
}

/// Builder for [`BridgeRuntime`].
#[derive(Default)]
pub struct BridgeRuntimeBuilder {
    loader: Option<ConfigLoader>,
    config: Option<OneBotConfig>,
    setup: Vec<SetupFn>,
}

impl BridgeRuntimeBuilder {
    /// Uses a pre-built configuration instead of loading one.
    pub fn config(mut self, config: OneBotConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Loads configuration from a specific file.
    pub fn config_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        self.loader = Some(ConfigLoader::new().file(path));
        self
    }

    /// Uses a fully-customized [`ConfigLoader`].
    pub fn loader(mut self, loader: ConfigLoader) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Queues an action-registration step.
    ///
    /// Steps run in order during `build()`; a duplicate action name makes
    /// the whole build fail.
    pub fn actions<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ActionRegistry) -> RegistryResult<()> + 'static,
    {
        self.setup.push(Box::new(setup));
        self
    }

    /// Loads and validates the configuration, assembles the registry, and
    /// returns the runtime.
    ///
    /// # Errors
    ///
    /// Any configuration or registration failure aborts the build; no
    /// partially-configured runtime is ever returned.
    pub fn build(self) -> RuntimeResult<BridgeRuntime> {
        let config = match (self.config, self.loader) {
            (Some(config), _) => config,
            (None, Some(loader)) => loader.load()?,
            (None, None) => ConfigLoader::new().load()?,
        };
        validate_config(&config)?;

        let mut registry = ActionRegistry::new();
        for setup in self.setup {
            setup(&mut registry)?;
        }

        info!(
            actions = registry.len(),
            http_servers = config.network.http_servers.len(),
            http_clients = config.network.http_clients.len(),
            websocket_servers = config.network.websocket_servers.len(),
            websocket_clients = config.network.websocket_clients.len(),
            "Bridge runtime ready"
        );

        Ok(BridgeRuntime { config, registry })
    }
}

// =============================================================================
// Tests
// =============================================================================
