//! Unified error types for the Braze dispatch core.

use thiserror::Error;

/// Boxed error type for handler failures.
///
/// Handlers report failure by returning `Err`; the dispatcher converts it
/// into a `HandlerExecutionError` envelope and never lets it escape the
/// dispatch boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors produced by schema validation of an action payload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The input is not a JSON object.
    #[error("payload must be an object")]
    NotAnObject,

    /// A required field is absent from the input.
    #[error("missing required field: {field}")]
    MissingField {
        /// Path of the missing field.
        field: &'static str,
    },

    /// A field value does not match any accepted type.
    #[error("field '{field}' has wrong type: expected {expected}")]
    WrongType {
        /// Path of the offending field.
        field: &'static str,
        /// Human-readable description of the accepted types.
        expected: &'static str,
    },

    /// A field value is not a member of the declared enumeration.
    #[error("field '{field}' must be one of {allowed:?}, got '{got}'")]
    NotInEnum {
        /// Path of the offending field.
        field: &'static str,
        /// The declared value set.
        allowed: &'static [&'static str],
        /// The rejected value.
        got: String,
    },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Registry Errors
// =============================================================================

/// Errors that can occur while assembling an action registry.
///
/// These are configuration errors: they are surfaced at process start and
/// are fatal, never reported per-call.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// An action with the same name is already registered.
    #[error("action '{0}' is already registered")]
    DuplicateAction(String),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
