//! # Braze Runtime
//!
//! Configuration model and startup orchestration for the Braze protocol
//! bridge.
//!
//! This crate owns everything between "raw configuration input" and "a
//! running dispatch boundary":
//!
//! - **Adapter configuration model**: per-kind canonical defaults and
//!   shallow overlay merge ([`config::adapter`]).
//! - **Network aggregate**: ordered adapter lists per transport kind plus
//!   process-wide settings ([`config::network`]).
//! - **Legacy migration**: one-time transformation of the v1
//!   single-adapter format ([`config::legacy`]).
//! - **Loading**: layered figment sources with legacy-shape detection
//!   ([`config::loader`]).
//! - **Validation**: post-merge checks, fatal before any adapter starts
//!   ([`config::validation`]).
//! - **Logging**: tracing subscriber setup ([`logging`]).
//! - **Runtime facade**: [`BridgeRuntime`] tying it all together.
//!
//! ## Startup flow
//!
//! ```text
//! raw config ──▶ detect shape ──▶ migrate (v1) ─┐
//!                      │                        ├─▶ validate ─▶ BridgeRuntime
//!                      └────────▶ merge (v2) ───┘
//! ```
//!
//! The resulting [`config::OneBotConfig`] is immutable for the lifetime
//! of the process; adapters are not hot-reloaded.

pub mod config;
pub mod error;
pub mod logging;
pub mod runtime;

pub use config::{ConfigError, ConfigLoader, ConfigResult, OneBotConfig};
pub use error::{RuntimeError, RuntimeResult};
pub use logging::{LogFormat, LogOutput, LoggingBuilder};
pub use runtime::{BridgeRuntime, BridgeRuntimeBuilder};
