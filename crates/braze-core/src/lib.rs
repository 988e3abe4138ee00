//! # Braze Core
//!
//! The action dispatch engine of the Braze protocol bridge.
//!
//! This crate is protocol-agnostic: it knows nothing about chat clients or
//! network transports. It provides the pieces every transport shares:
//!
//! - **Schema validation**: declarative, data-driven payload schemas
//!   ([`Schema`], [`FieldKind`]) producing validated [`Payload`]s.
//! - **Action registry**: named operations with a uniform invocation
//!   contract ([`ActionRegistry`]).
//! - **Envelopes**: the request/response wrapper format at the dispatch
//!   boundary ([`InvocationEnvelope`], [`ResultEnvelope`]).
//!
//! ## Dispatch flow
//!
//! ```text
//! ┌───────────┐    ┌────────────────┐    ┌─────────┐
//! │ Transport │───▶│ ActionRegistry │───▶│ Handler │──▶ chat-client API
//! │ (external)│◀───│ validate+route │◀───│ (async) │
//! └───────────┘    └────────────────┘    └─────────┘
//! ```
//!
//! Every dispatch resolves to a [`ResultEnvelope`]; failures are
//! classified by [`ErrorKind`] and never propagate as raised errors to the
//! transport layer.
//!
//! ## Example
//!
//! ```rust
//! use braze_core::{ActionRegistry, FieldKind, Schema};
//! use serde_json::json;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let mut registry = ActionRegistry::new();
//! registry
//!     .register(
//!         "get_status",
//!         Schema::new().optional("verbose", FieldKind::Boolean),
//!         |payload| async move {
//!             let verbose = payload.get_bool("verbose").unwrap_or(false);
//!             Ok(json!({ "online": true, "verbose": verbose }))
//!         },
//!     )
//!     .expect("unique action name");
//!
//! let result = registry.dispatch("get_status", json!({})).await;
//! assert!(result.is_ok());
//! # });
//! ```

pub mod envelope;
pub mod error;
pub mod registry;
pub mod schema;

pub use envelope::{ErrorKind, InvocationEnvelope, ResultEnvelope};
pub use error::{BoxError, RegistryError, RegistryResult, ValidationError, ValidationResult};
pub use registry::{ActionRegistry, BoxedHandler, HandlerResult};
pub use schema::{FieldKind, FieldSpec, Payload, Schema};
