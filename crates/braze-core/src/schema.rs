//! Data-driven payload schemas and validation.
//!
//! A [`Schema`] is a plain value describing the fields an action accepts:
//! which are required, which primitive types each accepts (including the
//! "number or string" union common to chat protocol identifiers), and any
//! enumerated value sets. Schemas are built once at registration time and
//! never mutated afterwards, so they can be read concurrently from any
//! number of in-flight dispatches.
//!
//! Validation is purely structural:
//!
//! - required fields must be present,
//! - present fields must match one of the accepted types (no coercion),
//! - enum fields must be members of the declared set,
//! - unknown input fields are ignored for forward compatibility.
//!
//! The resulting [`Payload`] contains only schema-declared fields, with
//! optional fields present only when supplied. The validator never injects
//! defaults — defaulting is an explicit, per-handler decision.
//!
//! # Example
//!
//! ```rust
//! use braze_core::{FieldKind, Schema};
//!
//! let schema = Schema::new()
//!     .required("group_id", FieldKind::NumberOrString)
//!     .optional("type", FieldKind::Enum(&["all", "talkative"]));
//!
//! let payload = schema
//!     .validate(&serde_json::json!({ "group_id": 123, "extra": true }))
//!     .unwrap();
//! assert_eq!(payload.id_string("group_id").as_deref(), Some("123"));
//! assert!(payload.get("extra").is_none());
//! ```

use serde_json::{Map, Value};

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Schema description
// =============================================================================

/// Accepted type for a single schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON number.
    Number,
    /// A JSON string.
    String,
    /// A JSON boolean.
    Boolean,
    /// A JSON number or string — the union used for protocol identifiers.
    ///
    /// The validator accepts either representation untouched; turning the
    /// value into the form a downstream API requires (usually a string) is
    /// the handler's job, done explicitly via [`Payload::id_string`].
    NumberOrString,
    /// A string drawn from a fixed value set.
    Enum(&'static [&'static str]),
}

impl FieldKind {
    /// Human-readable description of the accepted types.
    fn expected(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::NumberOrString => "number or string",
            Self::Enum(_) => "string",
        }
    }

    /// Checks a value against this kind, without coercing it.
    fn check(&self, field: &'static str, value: &Value) -> ValidationResult<()> {
        let type_ok = match self {
            Self::Number => value.is_number(),
            Self::String | Self::Enum(_) => value.is_string(),
            Self::Boolean => value.is_boolean(),
            Self::NumberOrString => value.is_number() || value.is_string(),
        };
        if !type_ok {
            return Err(ValidationError::WrongType {
                field,
                expected: self.expected(),
            });
        }
        if let Self::Enum(allowed) = *self {
            // Type check above guarantees a string here.
            let got = value.as_str().unwrap_or_default();
            if !allowed.contains(&got) {
                return Err(ValidationError::NotInEnum {
                    field,
                    allowed,
                    got: got.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Declaration of a single payload field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name as it appears in the raw input.
    pub name: &'static str,
    /// Whether absence of the field fails validation.
    pub required: bool,
    /// The accepted type(s) for the field.
    pub kind: FieldKind,
}

/// Declarative description of an action's payload.
///
/// Pure data; owned by the registered action and shared read-only across
/// concurrent dispatches.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Creates an empty schema accepting any object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a required field.
    pub fn required(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec {
            name,
            required: true,
            kind,
        });
        self
    }

    /// Declares an optional field.
    pub fn optional(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec {
            name,
            required: false,
            kind,
        });
        self
    }

    /// Returns the declared fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Validates raw input against this schema.
    ///
    /// On success the returned [`Payload`] carries exactly the declared
    /// fields found in the input; unknown fields are dropped, nothing is
    /// defaulted.
    pub fn validate(&self, input: &Value) -> ValidationResult<Payload> {
        let object = input.as_object().ok_or(ValidationError::NotAnObject)?;

        let mut fields = Map::new();
        for spec in &self.fields {
            match object.get(spec.name) {
                Some(value) => {
                    spec.kind.check(spec.name, value)?;
                    fields.insert(spec.name.to_string(), value.clone());
                }
                None if spec.required => {
                    return Err(ValidationError::MissingField { field: spec.name });
                }
                None => {}
            }
        }

        Ok(Payload { fields })
    }
}

// =============================================================================
// Payload
// =============================================================================

/// The validated, structurally-typed output of one validation run.
///
/// Scoped to a single invocation and discarded once the handler returns.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    /// Returns a declared field's raw value, if it was supplied.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns a field as a string slice.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Returns a field as an unsigned integer.
    pub fn get_u64(&self, field: &str) -> Option<u64> {
        self.get(field).and_then(Value::as_u64)
    }

    /// Returns a field as a boolean.
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }

    /// Coerces a "number or string" identifier field into its string form.
    ///
    /// This is the explicit coercion point for handlers whose downstream
    /// API takes string identifiers regardless of how the caller spelled
    /// them. Non-identifier values return `None`.
    pub fn id_string(&self, field: &str) -> Option<String> {
        match self.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn honor_schema() -> Schema {
        Schema::new()
            .required("group_id", FieldKind::NumberOrString)
            .optional("type", FieldKind::Enum(&["all", "talkative", "emotion"]))
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = honor_schema().validate(&json!({})).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "group_id" });
    }

    #[test]
    fn number_or_string_accepts_both_without_coercion() {
        let schema = honor_schema();

        let by_number = schema.validate(&json!({ "group_id": 123 })).unwrap();
        assert_eq!(by_number.get("group_id"), Some(&json!(123)));

        let by_string = schema.validate(&json!({ "group_id": "123" })).unwrap();
        assert_eq!(by_string.get("group_id"), Some(&json!("123")));

        let err = schema.validate(&json!({ "group_id": true })).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::WrongType {
                field: "group_id",
                ..
            }
        ));
    }

    #[test]
    fn enum_membership_is_enforced() {
        let schema = honor_schema();
        schema
            .validate(&json!({ "group_id": 1, "type": "talkative" }))
            .unwrap();

        let err = schema
            .validate(&json!({ "group_id": 1, "type": "champion" }))
            .unwrap_err();
        assert!(matches!(err, ValidationError::NotInEnum { field: "type", .. }));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload = honor_schema()
            .validate(&json!({ "group_id": 1, "future_flag": true }))
            .unwrap();
        assert!(payload.get("future_flag").is_none());
    }

    #[test]
    fn optional_fields_are_not_defaulted() {
        let payload = honor_schema().validate(&json!({ "group_id": 1 })).unwrap();
        assert!(payload.get("type").is_none());
    }

    #[test]
    fn non_object_input_is_rejected() {
        let err = honor_schema().validate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject);
    }

    #[test]
    fn id_string_coerces_numbers_explicitly() {
        let schema = honor_schema();
        let payload = schema.validate(&json!({ "group_id": 123 })).unwrap();
        assert_eq!(payload.id_string("group_id").as_deref(), Some("123"));

        let payload = schema.validate(&json!({ "group_id": "abc" })).unwrap();
        assert_eq!(payload.id_string("group_id").as_deref(), Some("abc"));
    }
}
