//! Built-in OneBot actions.
//!
//! Each action is a schema plus a handler closure over the [`ChatApi`]
//! capability. Handler-level policy (defaulting an absent category,
//! coercing identifiers to strings) lives here, per handler — the
//! dispatcher never generalizes it.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use braze_core::{ActionRegistry, FieldKind, HandlerResult, Payload, RegistryResult, Schema};

use crate::client::ChatApi;
use crate::model::HonorType;

/// Default number of custom faces fetched when the caller omits `count`.
const DEFAULT_FACE_COUNT: u64 = 48;

/// Registers the built-in action set against `registry`.
///
/// # Errors
///
/// Propagates [`braze_core::RegistryError::DuplicateAction`] if any of the
/// built-in names is already taken; callers treat this as fatal at
/// startup.
pub fn register_builtin_actions(
    registry: &mut ActionRegistry,
    api: Arc<dyn ChatApi>,
) -> RegistryResult<()> {
    let honor_api = Arc::clone(&api);
    registry.register(
        "get_group_honor_info",
        Schema::new()
            .required("group_id", FieldKind::NumberOrString)
            .optional("type", FieldKind::Enum(HonorType::VALUES)),
        move |payload| {
            let api = Arc::clone(&honor_api);
            async move { get_group_honor_info(api, payload).await }
        },
    )?;

    registry.register(
        "fetch_custom_face",
        Schema::new().optional("count", FieldKind::Number),
        move |payload| {
            let api = Arc::clone(&api);
            async move { fetch_custom_face(api, payload).await }
        },
    )?;

    Ok(())
}

/// `get_group_honor_info`: honor list of one category for a group.
///
/// An absent `type` means "all categories"; the group identifier reaches
/// the chat client in its string form regardless of how the caller spelled
/// it.
async fn get_group_honor_info(api: Arc<dyn ChatApi>, payload: Payload) -> HandlerResult {
    let group_id = payload
        .id_string("group_id")
        .ok_or("group_id is not an identifier")?;

    let honor_type = match payload.get_str("type") {
        Some(value) => {
            HonorType::parse(value).ok_or_else(|| format!("unknown honor type: {value}"))?
        }
        None => HonorType::All,
    };

    debug!(group_id = %group_id, honor_type = %honor_type, "Fetching group honor info");
    let honors = api.get_group_honor_info(&group_id, honor_type).await?;
    Ok(honors)
}

/// `fetch_custom_face`: URLs of the user's favorite custom faces.
async fn fetch_custom_face(api: Arc<dyn ChatApi>, payload: Payload) -> HandlerResult {
    let count = payload.get_u64("count").unwrap_or(DEFAULT_FACE_COUNT);

    debug!(count = count, "Fetching custom faces");
    let faces = api.fetch_favorite_emoji(count).await?;
    let urls: Vec<String> = faces.into_iter().map(|face| face.url).collect();
    Ok(json!(urls))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::{Value, json};

    use braze_core::{ErrorKind, ResultEnvelope};

    use super::*;
    use crate::model::FavoriteEmoji;

    /// Records every downstream call so tests can assert on what the
    /// handlers actually sent.
    #[derive(Default)]
    struct RecordingApi {
        honor_calls: Mutex<Vec<(String, HonorType)>>,
        face_calls: Mutex<Vec<u64>>,
        fail: bool,
    }

    #[async_trait]
    impl ChatApi for RecordingApi {
        async fn get_group_honor_info(
            &self,
            group_id: &str,
            honor_type: HonorType,
        ) -> anyhow::Result<Value> {
            if self.fail {
                anyhow::bail!("honor backend offline");
            }
            self.honor_calls
                .lock()
                .unwrap()
                .push((group_id.to_string(), honor_type));
            Ok(json!([{ "group_id": group_id }]))
        }

        async fn fetch_favorite_emoji(&self, count: u64) -> anyhow::Result<Vec<FavoriteEmoji>> {
            self.face_calls.lock().unwrap().push(count);
            Ok(vec![
                FavoriteEmoji {
                    url: "https://faces.example/1.png".to_string(),
                    emoji_id: None,
                },
                FavoriteEmoji {
                    url: "https://faces.example/2.png".to_string(),
                    emoji_id: Some("2".to_string()),
                },
            ])
        }
    }

    fn registry_with(api: Arc<RecordingApi>) -> ActionRegistry {
        let mut registry = ActionRegistry::new();
        register_builtin_actions(&mut registry, api).unwrap();
        registry
    }

    #[tokio::test]
    async fn honor_info_defaults_type_and_coerces_group_id() {
        let api = Arc::new(RecordingApi::default());
        let registry = registry_with(Arc::clone(&api));

        let envelope = registry
            .dispatch("get_group_honor_info", json!({ "group_id": 123 }))
            .await;
        assert!(envelope.is_ok());

        let calls = api.honor_calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[("123".to_string(), HonorType::All)]);
    }

    #[tokio::test]
    async fn honor_info_passes_explicit_type_through() {
        let api = Arc::new(RecordingApi::default());
        let registry = registry_with(Arc::clone(&api));

        registry
            .dispatch(
                "get_group_honor_info",
                json!({ "group_id": "456", "type": "talkative" }),
            )
            .await;

        let calls = api.honor_calls.lock().unwrap();
        assert_eq!(
            calls.as_slice(),
            &[("456".to_string(), HonorType::Talkative)]
        );
    }

    #[tokio::test]
    async fn honor_info_rejects_unknown_category_before_the_handler() {
        let api = Arc::new(RecordingApi::default());
        let registry = registry_with(Arc::clone(&api));

        let envelope = registry
            .dispatch(
                "get_group_honor_info",
                json!({ "group_id": 1, "type": "champion" }),
            )
            .await;

        assert!(matches!(
            envelope,
            ResultEnvelope::Failed {
                error_kind: ErrorKind::ValidationFailed,
                ..
            }
        ));
        assert!(api.honor_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn api_failure_surfaces_as_handler_execution_error() {
        let api = Arc::new(RecordingApi {
            fail: true,
            ..Default::default()
        });
        let registry = registry_with(api);

        let envelope = registry
            .dispatch("get_group_honor_info", json!({ "group_id": 1 }))
            .await;

        assert_eq!(
            envelope,
            ResultEnvelope::failed(ErrorKind::HandlerExecutionError, "honor backend offline")
        );
    }

    #[tokio::test]
    async fn fetch_custom_face_defaults_count_and_returns_urls() {
        let api = Arc::new(RecordingApi::default());
        let registry = registry_with(Arc::clone(&api));

        let envelope = registry.dispatch("fetch_custom_face", json!({})).await;
        assert_eq!(
            envelope,
            ResultEnvelope::ok(json!([
                "https://faces.example/1.png",
                "https://faces.example/2.png"
            ]))
        );
        assert_eq!(api.face_calls.lock().unwrap().as_slice(), &[48]);
    }

    #[tokio::test]
    async fn fetch_custom_face_honors_explicit_count() {
        let api = Arc::new(RecordingApi::default());
        let registry = registry_with(Arc::clone(&api));

        registry
            .dispatch("fetch_custom_face", json!({ "count": 5 }))
            .await;
        assert_eq!(api.face_calls.lock().unwrap().as_slice(), &[5]);
    }
}
