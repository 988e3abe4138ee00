//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading, migration and
/// validation.
///
/// All of these are surfaced before any adapter starts; a process never
/// accepts traffic with a partially-built configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found at the specified path.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Failed to read the configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Configuration could not be parsed or extracted.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Malformed legacy (v1) configuration.
    #[error("Legacy configuration migration failed: {message}")]
    MigrationError {
        /// What was wrong with the legacy input.
        message: String,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {message}")]
    ValidationError {
        /// What was wrong with the merged configuration.
        message: String,
    },

    /// Invalid port number.
    #[error("Invalid port number for {adapter}: {port}")]
    InvalidPort {
        /// Adapter kind tag the port belongs to.
        adapter: &'static str,
        /// The rejected port.
        port: u16,
    },

    /// Invalid URL format.
    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Creates a migration error with the given message.
    pub fn migration(message: impl Into<String>) -> Self {
        Self::MigrationError {
            message: message.into(),
        }
    }

    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
