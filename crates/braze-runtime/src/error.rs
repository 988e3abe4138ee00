//! Runtime error types.

use thiserror::Error;

/// Errors that can occur while assembling the bridge runtime.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Configuration loading, migration or validation failed.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Action registration failed.
    #[error(transparent)]
    Registry(#[from] braze_core::RegistryError),
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
