//! # Braze
//!
//! A OneBot-style protocol bridge core: a uniform, schema-validated
//! action interface served over several simultaneous network transports,
//! and the configuration model that describes those transports.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────┐     ┌────────────────┐     ┌──────────────┐
//! │ Transports     │────▶│ ActionRegistry │────▶│ Handlers     │──▶ ChatApi
//! │ (N adapters,   │◀────│ validate +     │◀────│ (braze-      │
//! │  4 kinds)      │     │ dispatch       │     │  onebot)     │
//! └────────────────┘     └────────────────┘     └──────────────┘
//!         ▲
//!         │ OneBotConfig (merged / migrated once at startup)
//! ┌────────────────┐
//! │ braze-runtime  │
//! └────────────────┘
//! ```
//!
//! - **braze-core**: the dispatch engine — schemas, registry, envelopes.
//! - **braze-onebot**: the OneBot action surface and the `ChatApi`
//!   capability trait.
//! - **braze-runtime**: configuration (defaults, merge, v1 migration,
//!   loading, validation), logging, and the [`BridgeRuntime`] facade.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use braze::prelude::*;
//!
//! let api: Arc<dyn ChatApi> = Arc::new(MyChatClient::connect()?);
//! let runtime = BridgeRuntime::builder()
//!     .config_file("./onebot.json")
//!     .actions(move |registry| register_builtin_actions(registry, api))
//!     .build()?;
//! ```

pub use braze_onebot as onebot;
pub use braze_runtime as runtime;

pub use braze_core::{
    ActionRegistry, ErrorKind, FieldKind, InvocationEnvelope, Payload, ResultEnvelope, Schema,
};
pub use braze_onebot::{ChatApi, HonorType, register_builtin_actions};
pub use braze_runtime::{BridgeRuntime, ConfigLoader, LoggingBuilder, OneBotConfig};

/// Commonly used imports, in one place.
pub mod prelude {
    pub use braze_core::{
        ActionRegistry, ErrorKind, FieldKind, InvocationEnvelope, Payload, ResultEnvelope, Schema,
    };
    pub use braze_onebot::{ChatApi, FavoriteEmoji, HonorType, register_builtin_actions};
    pub use braze_runtime::{
        BridgeRuntime, BridgeRuntimeBuilder, ConfigLoader, LoggingBuilder, OneBotConfig,
    };
}
