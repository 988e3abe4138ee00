//! # Braze OneBot
//!
//! The OneBot-flavored action surface for the Braze protocol bridge.
//!
//! This crate supplies what the protocol-agnostic dispatch engine in
//! `braze-core` deliberately leaves out:
//!
//! - [`ChatApi`]: the opaque capability trait standing in for the
//!   underlying chat client,
//! - the honor/emoji data model ([`HonorType`], [`FavoriteEmoji`]),
//! - the built-in action handlers and their schemas, wired up through
//!   [`register_builtin_actions`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use braze_core::ActionRegistry;
//! use braze_onebot::{ChatApi, register_builtin_actions};
//!
//! let api: Arc<dyn ChatApi> = Arc::new(MyChatClient::connect()?);
//! let mut registry = ActionRegistry::new();
//! register_builtin_actions(&mut registry, api)?;
//! ```

pub mod actions;
pub mod client;
pub mod model;

pub use actions::register_builtin_actions;
pub use client::ChatApi;
pub use model::{FavoriteEmoji, HonorType};
