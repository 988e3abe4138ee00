//! Configuration loader using figment.
//!
//! Supports layered loading from multiple sources, later sources
//! overriding earlier ones:
//!
//! 1. Profile-specific config file (`braze.{profile}.json`)
//! 2. Main config file (`braze.json` / `onebot.json`)
//! 3. Environment variables (`BRAZE_*`, `__` as separator)
//!
//! JSON is always available; TOML and YAML files are searched as well when
//! the `toml-config` / `yaml-config` features are enabled.
//!
//! The loader extracts one raw value, detects which configuration
//! generation it is looking at, and routes it through the legacy migrator
//! or the v2 merge:
//!
//! - an object with no `network` key but any of `http`, `ws`, `reverseWs`
//!   is legacy (v1) and is migrated,
//! - anything else is treated as current-format (v2) partial input.
//!
//! # Example
//!
//! ```rust,ignore
//! use braze_runtime::config::ConfigLoader;
//!
//! // Search default locations, apply env overrides.
//! let config = ConfigLoader::new().load()?;
//!
//! // Load a specific file.
//! let config = ConfigLoader::new().file("./onebot.json").load()?;
//! ```

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json};
#[cfg(feature = "toml-config")]
use figment::providers::Toml;
#[cfg(feature = "yaml-config")]
use figment::providers::Yaml;
use serde_json::Value;
use tracing::{debug, info, trace, warn};

use super::error::{ConfigError, ConfigResult};
use super::legacy::{V1Config, migrate_v1_config};
use super::network::{OneBotConfig, UserConfig, merge_onebot_config};

/// Configuration profile for environment-specific settings.
#[derive(Debug, Clone, Default)]
pub enum Profile {
    /// Development profile (default).
    #[default]
    Development,
    /// Production profile.
    Production,
    /// Custom profile name.
    Custom(String),
}

impl Profile {
    /// Returns the profile name as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Custom(name) => name,
        }
    }

    /// Creates a profile from `BRAZE_PROFILE` or defaults to Development.
    pub fn from_env() -> Self {
        std::env::var("BRAZE_PROFILE")
            .map(|p| match p.to_lowercase().as_str() {
                "production" | "prod" => Self::Production,
                "development" | "dev" => Self::Development,
                other => Self::Custom(other.to_string()),
            })
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builds the [`OneBotConfig`] aggregate from a raw configuration value.
///
/// This is the format-independent entry point the loader funnels every
/// source through; it is public so tests and embedders can feed values
/// obtained elsewhere.
pub fn build_onebot_config(raw: &Value) -> ConfigResult<OneBotConfig> {
    if is_legacy_shape(raw) {
        info!("Legacy (v1) configuration detected, migrating to the multi-adapter format");
        let v1: V1Config = serde_json::from_value(raw.clone())?;
        migrate_v1_config(&v1)
    } else {
        let user: UserConfig = serde_json::from_value(raw.clone())?;
        Ok(merge_onebot_config(&user))
    }
}

/// A raw value is legacy when it has no `network` key but carries at
/// least one of the v1 transport sections.
fn is_legacy_shape(raw: &Value) -> bool {
    let Some(object) = raw.as_object() else {
        return false;
    };
    !object.contains_key("network")
        && ["http", "ws", "reverseWs"]
            .iter()
            .any(|key| object.contains_key(*key))
}

/// Configuration loader with figment-based multi-source support.
pub struct ConfigLoader {
    /// Configuration profile.
    profile: Profile,
    /// Search paths for configuration files.
    search_paths: Vec<PathBuf>,
    /// Whether to load environment variables.
    load_env: bool,
    /// Specific config file to load (overrides search).
    config_file: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Creates a new configuration loader with defaults.
    pub fn new() -> Self {
        Self {
            profile: Profile::from_env(),
            search_paths: Vec::new(),
            load_env: true,
            config_file: None,
        }
    }

    /// Sets the configuration profile.
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        let p = profile.into();
        self.profile = match p.to_lowercase().as_str() {
            "production" | "prod" => Profile::Production,
            "development" | "dev" => Profile::Development,
            _ => Profile::Custom(p),
        };
        self
    }

    /// Adds a search path for configuration files.
    pub fn search_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.search_paths.push(path.as_ref().to_path_buf());
        self
    }

    /// Sets a specific configuration file to load.
    pub fn file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enables loading environment variables (default: true).
    pub fn with_env(mut self) -> Self {
        self.load_env = true;
        self
    }

    /// Disables loading environment variables.
    pub fn without_env(mut self) -> Self {
        self.load_env = false;
        self
    }

    /// Loads, migrates/merges, and returns the configuration aggregate.
    ///
    /// The result is fully defaulted but not yet validated; run
    /// [`validate_config`](super::validation::validate_config) before
    /// handing it to the transport layer.
    pub fn load(self) -> ConfigResult<OneBotConfig> {
        let profile = self.profile.clone();
        let figment = self.build_figment()?;

        let raw: Value = figment
            .extract()
            .map_err(|e| ConfigError::ParseError(format!("Failed to extract configuration: {e}")))?;

        let config = build_onebot_config(&raw)?;

        debug!(
            profile = %profile,
            http_servers = config.network.http_servers.len(),
            http_clients = config.network.http_clients.len(),
            websocket_servers = config.network.websocket_servers.len(),
            websocket_clients = config.network.websocket_clients.len(),
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Builds the figment instance with all sources.
    fn build_figment(self) -> ConfigResult<Figment> {
        let mut figment = Figment::new();

        if let Some(path) = &self.config_file {
            if path.exists() {
                info!(path = %path.display(), "Loading configuration file");
                figment = Self::merge_config_file(figment, path)?;
            } else {
                return Err(ConfigError::FileNotFound(path.clone()));
            }
        } else {
            figment = self.load_config_files(figment);
        }

        if self.load_env {
            trace!("Loading environment variables with BRAZE_ prefix");
            figment = figment.merge(
                Env::prefixed("BRAZE_")
                    .split("__")
                    .map(|key| key.as_str().replace("__", ".").into()),
            );
        }

        Ok(figment)
    }

    /// Merges a single config file into the figment, dispatching on file
    /// extension. Only extensions enabled via feature flags are accepted.
    fn merge_config_file(figment: Figment, path: &Path) -> ConfigResult<Figment> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "json" => Ok(figment.merge(Json::file(path))),
            #[cfg(feature = "toml-config")]
            "toml" => Ok(figment.merge(Toml::file(path))),
            #[cfg(feature = "yaml-config")]
            "yaml" | "yml" => Ok(figment.merge(Yaml::file(path))),
            _ => Err(ConfigError::ParseError(format!(
                "Unsupported or disabled configuration file format: .{ext}"
            ))),
        }
    }

    /// Resolves the effective list of search paths.
    fn resolve_search_paths(&self) -> Vec<PathBuf> {
        if self.search_paths.is_empty() {
            let mut paths = Vec::new();
            if let Ok(cwd) = std::env::current_dir() {
                paths.push(cwd);
            }
            if let Some(config_dir) = dirs::config_dir() {
                paths.push(config_dir.join("braze"));
            }
            paths
        } else {
            self.search_paths.clone()
        }
    }

    /// Common search logic for a single file format.
    ///
    /// Iterates `search_paths × base_names`, tries a profile-specific
    /// variant first, then the base file. Returns `(figment, true)` as
    /// soon as a base file is found, or `(figment, false)` if nothing was
    /// located.
    fn load_format_files<F>(
        &self,
        mut figment: Figment,
        search_paths: &[PathBuf],
        base_names: &[&str],
        merge_fn: F,
    ) -> (Figment, bool)
    where
        F: Fn(Figment, &Path) -> Figment,
    {
        for search_path in search_paths {
            for base_name in base_names {
                if let Some(dot) = base_name.rfind('.') {
                    let stem = &base_name[..dot];
                    let ext = &base_name[dot + 1..];

                    // Profile-specific: e.g. braze.production.json
                    let profile_name = format!("{}.{}.{}", stem, self.profile.as_str(), ext);
                    let profile_path = search_path.join(&profile_name);
                    if profile_path.exists() {
                        debug!(path = %profile_path.display(), "Loading profile-specific config");
                        figment = merge_fn(figment, &profile_path);
                    }

                    let base_path = search_path.join(base_name);
                    if base_path.exists() {
                        info!(path = %base_path.display(), "Loading configuration file");
                        figment = merge_fn(figment, &base_path);
                        return (figment, true);
                    }
                }
            }
        }
        (figment, false)
    }

    /// Searches for and loads configuration files from search paths.
    fn load_config_files(&self, mut figment: Figment) -> Figment {
        let search_paths = self.resolve_search_paths();
        let mut found = false;

        let (f, ok) = self.load_format_files(
            figment,
            &search_paths,
            &["braze.json", "onebot.json", "config.json"],
            |fig, path| fig.merge(Json::file(path)),
        );
        figment = f;
        found |= ok;

        #[cfg(feature = "toml-config")]
        {
            let (f, ok) = self.load_format_files(
                figment,
                &search_paths,
                &["braze.toml", "config.toml"],
                |fig, path| fig.merge(Toml::file(path)),
            );
            figment = f;
            found |= ok;
        }

        #[cfg(feature = "yaml-config")]
        {
            let (f, ok) = self.load_format_files(
                figment,
                &search_paths,
                &["braze.yaml", "braze.yml", "config.yaml", "config.yml"],
                |fig, path| fig.merge(Yaml::file(path)),
            );
            figment = f;
            found |= ok;
        }

        if !found {
            warn!("No configuration file found, using defaults");
        }
        figment
    }
}

// =============================================================================
// Tests
// =============================================================================
