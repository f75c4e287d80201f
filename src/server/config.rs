//! Configuration loading for emoscoped.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.emoscope/config.toml` (user)
//! 3. `/etc/emoscope/config.toml` (system)
//!
//! When no file exists the built-in defaults apply; the daemon runs
//! unconfigured against the hosted classifier.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::providers::RetryConfig;
use crate::{EmoscopeError, Result};

/// Server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub watson: WatsonConfig,
    #[serde(default)]
    pub retry: RetrySettings,
}

/// Server network configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:5000).
    #[serde(default = "default_address")]
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
        }
    }
}

fn default_address() -> String {
    "0.0.0.0:5000".to_string()
}

/// Upstream classifier configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WatsonConfig {
    /// Base URL of the Watson NLP service.
    #[serde(default = "default_watson_url")]
    pub base_url: String,
    /// Model id sent in the `grpc-metadata-mm-model-id` header.
    #[serde(default = "default_model_id")]
    pub model_id: String,
    /// Upstream request timeout in seconds (default: 60).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for WatsonConfig {
    fn default() -> Self {
        Self {
            base_url: default_watson_url(),
            model_id: default_model_id(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_watson_url() -> String {
    "https://sn-watson-emotion.labs.skills.network".to_string()
}

fn default_model_id() -> String {
    "emotion_aggregated-workflow_lang_en_stock".to_string()
}

fn default_timeout() -> u64 {
    60
}

/// Retry behaviour toward the classifier. Disabled by default: any
/// upstream failure surfaces as-is after a single attempt.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrySettings {
    /// Maximum attempts including the initial request (default: 1, no retry).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base delay before the first retry, in milliseconds (default: 500).
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    /// Maximum delay between retries, in milliseconds (default: 30000).
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
    /// Whether to add random jitter to delays (default: false).
    #[serde(default)]
    pub jitter: bool,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            jitter: false,
        }
    }
}

fn default_max_attempts() -> u32 {
    1
}

fn default_initial_delay_ms() -> u64 {
    500
}

fn default_max_delay_ms() -> u64 {
    30_000
}

impl RetrySettings {
    /// Whether the retry decorator should be installed at all.
    pub fn enabled(&self) -> bool {
        self.max_attempts > 1
    }

    /// Convert to the provider-level [`RetryConfig`].
    pub fn to_retry_config(&self) -> RetryConfig {
        RetryConfig::new()
            .max_attempts(self.max_attempts)
            .initial_delay(Duration::from_millis(self.initial_delay_ms))
            .max_delay(Duration::from_millis(self.max_delay_ms))
            .jitter(self.jitter)
    }
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided; missing file is an error)
    /// 2. `~/.emoscope/config.toml`
    /// 3. `/etc/emoscope/config.toml`
    /// 4. Built-in defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit_path)? else {
            return Ok(Config::default());
        };
        let content = fs::read_to_string(&path).map_err(|e| {
            EmoscopeError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            EmoscopeError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Resolve the config file path. `None` means "use defaults".
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(EmoscopeError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".emoscope").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/emoscope/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}
