//! Configuration management for meow

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeminiConfig {
    pub model: String,
    pub base_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Optional cap on generated tokens; the service default applies when unset
    pub max_output_tokens: Option<usize>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            max_output_tokens: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub app_name: String,
    /// Wrap width for rendered markdown
    pub word_wrap: usize,
    /// Max characters accepted by the prompt input
    pub char_limit: usize,
    pub placeholder: String,
    /// Spinner/tick interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            app_name: "MeowCLI".to_string(),
            word_wrap: 100,
            char_limit: 256,
            placeholder: "Ask me anything...".to_string(),
            tick_rate_ms: 100,
        }
    }
}

impl Config {
    /// Load configuration from default location or fall back to defaults
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Get the configuration file path
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "meow")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Default location of the log file
    pub fn default_log_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "meow")
            .map(|dirs| dirs.data_local_dir().join("meow.log"))
            .unwrap_or_else(|| PathBuf::from("meow.log"))
    }
}
