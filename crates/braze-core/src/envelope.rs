//! Invocation and result envelopes at the dispatch boundary.
//!
//! Every transport, regardless of wire format, hands the dispatcher an
//! [`InvocationEnvelope`] and receives a [`ResultEnvelope`] back. The JSON
//! spelling of both shapes is part of the external interface and pinned by
//! tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An inbound action invocation: `{ "action": ..., "params": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct InvocationEnvelope {
    /// Name of the action to invoke.
    pub action: String,
    /// Raw, unvalidated parameters.
    #[serde(default)]
    pub params: Value,
}

/// Failure classification reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// No handler is registered for the requested action name.
    UnknownAction,
    /// The parameters did not satisfy the action's schema.
    ValidationFailed,
    /// The handler or a downstream API failed.
    HandlerExecutionError,
}

/// The outcome of one dispatch call.
///
/// Serializes as `{"status":"ok","data":...}` or
/// `{"status":"failed","errorKind":...,"message":...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResultEnvelope {
    /// The handler completed normally.
    Ok {
        /// The handler's return value.
        data: Value,
    },
    /// The invocation failed before or during handler execution.
    Failed {
        /// Failure classification.
        #[serde(rename = "errorKind")]
        error_kind: ErrorKind,
        /// Human-readable failure detail.
        message: String,
    },
}

impl ResultEnvelope {
    /// Wraps a handler return value as a success envelope.
    pub fn ok(data: Value) -> Self {
        Self::Ok { data }
    }

    /// Builds a failure envelope.
    pub fn failed(error_kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Failed {
            error_kind,
            message: message.into(),
        }
    }

    /// Returns `true` for success envelopes.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_envelope_wire_shape() {
        let envelope = ResultEnvelope::ok(json!({ "message_id": 7 }));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "status": "ok", "data": { "message_id": 7 } })
        );
    }

    #[test]
    fn failure_envelope_wire_shape() {
        let envelope = ResultEnvelope::failed(ErrorKind::UnknownAction, "unknown action: nope");
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "status": "failed",
                "errorKind": "UnknownAction",
                "message": "unknown action: nope"
            })
        );
    }

    #[test]
    fn invocation_params_default_to_null() {
        let envelope: InvocationEnvelope =
            serde_json::from_value(json!({ "action": "get_status" })).unwrap();
        assert_eq!(envelope.action, "get_status");
        assert!(envelope.params.is_null());
    }
}
