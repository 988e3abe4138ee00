//! The chat-client capability trait.
//!
//! Action handlers never talk to the chat client directly; they capture an
//! `Arc<dyn ChatApi>` and call its async operations. The trait keeps the
//! client opaque: primitive arguments in, plain data out, failures as
//! `anyhow` errors that the dispatcher turns into
//! `HandlerExecutionError` envelopes.
//!
//! Process bootstrapping supplies the real implementation; tests supply
//! recording fakes.

use async_trait::async_trait;
use serde_json::Value;

use crate::model::{FavoriteEmoji, HonorType};

/// Opaque asynchronous interface to the underlying chat client.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Fetches the honor list of one category for a group.
    ///
    /// `group_id` is always the string form of the identifier — coercion
    /// from numeric input happens in the handler, before this call.
    async fn get_group_honor_info(
        &self,
        group_id: &str,
        honor_type: HonorType,
    ) -> anyhow::Result<Value>;

    /// Fetches up to `count` favorite custom faces.
    async fn fetch_favorite_emoji(&self, count: u64) -> anyhow::Result<Vec<FavoriteEmoji>>;
}
