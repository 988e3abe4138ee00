//! Action registry and dispatcher.
//!
//! The registry maps an action name to a `{schema, handler}` record.
//! Handlers are plain async closures over whatever capabilities they need
//! (typically an `Arc` to the chat-client API); the dispatcher knows
//! nothing about those capabilities.
//!
//! Registration happens once at process start and duplicate names are a
//! fatal configuration error. After startup the registry is read-only and
//! safe to share across any number of concurrent dispatches.
//!
//! # Dispatch contract
//!
//! [`ActionRegistry::dispatch`] always resolves to a [`ResultEnvelope`]:
//!
//! 1. Unregistered name → `UnknownAction` failure, no handler invoked.
//! 2. Schema violation → `ValidationFailed` failure carrying the
//!    validator's detail, handler never invoked.
//! 3. Handler `Err` → `HandlerExecutionError` failure carrying the message.
//! 4. Handler `Ok` → success envelope wrapping the return value.
//!
//! Nothing escapes the dispatch boundary as an error to the transport
//! layer, and the dispatcher imposes no timeout of its own.

use std::collections::HashMap;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;
use tracing::{debug, warn};

use crate::envelope::{ErrorKind, InvocationEnvelope, ResultEnvelope};
use crate::error::{BoxError, RegistryError, RegistryResult};
use crate::schema::{Payload, Schema};

/// Result type returned by action handlers.
pub type HandlerResult = Result<Value, BoxError>;

/// Type-erased action handler.
pub type BoxedHandler = Arc<dyn Fn(Payload) -> BoxFuture<'static, HandlerResult> + Send + Sync>;

/// A registered action: its schema and handler.
struct ActionEntry {
    schema: Schema,
    handler: BoxedHandler,
}

/// Registry of named, schema-validated actions.
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, ActionEntry>,
}

impl ActionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an action under a unique name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateAction`] if the name is already
    /// taken. Callers treat this as fatal at startup.
    pub fn register<F, Fut>(
        &mut self,
        name: impl Into<String>,
        schema: Schema,
        handler: F,
    ) -> RegistryResult<()>
    where
        F: Fn(Payload) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        let name = name.into();
        if self.actions.contains_key(&name) {
            return Err(RegistryError::DuplicateAction(name));
        }

        debug!(action = %name, "Registered action");
        self.actions.insert(
            name,
            ActionEntry {
                schema,
                handler: Arc::new(move |payload| handler(payload).boxed()),
            },
        );
        Ok(())
    }

    /// Returns whether an action name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Returns the number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if no actions are registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the registered action names, in arbitrary order.
    pub fn action_names(&self) -> Vec<&str> {
        self.actions.keys().map(String::as_str).collect()
    }

    /// Dispatches a raw invocation and resolves to a result envelope.
    pub async fn dispatch(&self, name: &str, params: Value) -> ResultEnvelope {
        let Some(entry) = self.actions.get(name) else {
            warn!(action = %name, "Unknown action");
            return ResultEnvelope::failed(
                ErrorKind::UnknownAction,
                format!("unknown action: {name}"),
            );
        };

        let payload = match entry.schema.validate(&params) {
            Ok(payload) => payload,
            Err(e) => {
                debug!(action = %name, error = %e, "Payload validation failed");
                return ResultEnvelope::failed(ErrorKind::ValidationFailed, e.to_string());
            }
        };

        debug!(action = %name, "Dispatching action");
        match (entry.handler)(payload).await {
            Ok(data) => ResultEnvelope::ok(data),
            Err(e) => {
                warn!(action = %name, error = %e, "Action handler failed");
                ResultEnvelope::failed(ErrorKind::HandlerExecutionError, e.to_string())
            }
        }
    }

    /// Dispatches an [`InvocationEnvelope`].
    pub async fn dispatch_envelope(&self, envelope: InvocationEnvelope) -> ResultEnvelope {
        self.dispatch(&envelope.action, envelope.params).await
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::*;
    use crate::schema::FieldKind;

    fn counting_registry() -> (ActionRegistry, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut registry = ActionRegistry::new();
        registry
            .register(
                "echo_count",
                Schema::new().required("count", FieldKind::Number),
                move |payload| {
                    let counter = Arc::clone(&counter);
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        Ok(json!({ "count": payload.get_u64("count") }))
                    }
                },
            )
            .unwrap();
        (registry, calls)
    }

    #[test]
    fn duplicate_registration_is_a_startup_error() {
        let (mut registry, _) = counting_registry();
        let err = registry
            .register("echo_count", Schema::new(), |_| async { Ok(Value::Null) })
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateAction(name) if name == "echo_count"));
    }

    #[tokio::test]
    async fn unknown_action_invokes_no_handler() {
        let (registry, calls) = counting_registry();
        let envelope = registry.dispatch("no_such_action", json!({})).await;

        assert_eq!(
            envelope,
            ResultEnvelope::failed(ErrorKind::UnknownAction, "unknown action: no_such_action")
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn validation_failure_never_reaches_the_handler() {
        let (registry, calls) = counting_registry();
        let envelope = registry.dispatch("echo_count", json!({})).await;

        match envelope {
            ResultEnvelope::Failed { error_kind, message } => {
                assert_eq!(error_kind, ErrorKind::ValidationFailed);
                assert!(message.contains("count"));
            }
            other => panic!("expected failure envelope, got {other:?}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_dispatch_wraps_handler_output() {
        let (registry, calls) = counting_registry();
        let envelope = registry.dispatch("echo_count", json!({ "count": 3 })).await;

        assert_eq!(envelope, ResultEnvelope::ok(json!({ "count": 3 })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn handler_failure_becomes_an_envelope() {
        let mut registry = ActionRegistry::new();
        registry
            .register("always_fails", Schema::new(), |_| async {
                Err("downstream api unavailable".into())
            })
            .unwrap();

        let envelope = registry.dispatch("always_fails", json!({})).await;
        assert_eq!(
            envelope,
            ResultEnvelope::failed(
                ErrorKind::HandlerExecutionError,
                "downstream api unavailable"
            )
        );
    }

    #[tokio::test]
    async fn dispatch_envelope_round_trip() {
        let (registry, _) = counting_registry();
        let invocation: InvocationEnvelope =
            serde_json::from_value(json!({ "action": "echo_count", "params": { "count": 9 } }))
                .unwrap();

        let envelope = registry.dispatch_envelope(invocation).await;
        assert_eq!(envelope, ResultEnvelope::ok(json!({ "count": 9 })));
    }
}
