//! Chatbot configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main chatbot configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider configuration
    pub llm: LlmConfig,

    /// Conversation session behavior
    pub session: SessionConfig,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// 1. Explicit `--config` path (errors are fatal)
    /// 2. Project-local `.chatbot.yml`
    /// 3. User config `~/.config/chatbot/chatbot.yml`
    /// 4. Built-in defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let local_config = PathBuf::from(".chatbot.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("chatbot").join("chatbot.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, before logging is initialized
    ///
    /// Failures are swallowed; the caller falls back to its own default.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let path = match config_path {
            Some(p) => p.clone(),
            None => {
                let local = PathBuf::from(".chatbot.yml");
                if local.exists() {
                    local
                } else {
                    dirs::config_dir()?.join("chatbot").join("chatbot.yml")
                }
            }
        };

        let content = fs::read_to_string(path).ok()?;
        let config: Self = serde_yaml::from_str(&content).ok()?;
        config.log_level
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// LLM provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name ("ollama" or "openai")
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Environment variable holding the API key, if the provider needs one
    #[serde(rename = "api-key-env")]
    pub api_key_env: Option<String>,

    /// Maximum tokens per response
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "ollama".to_string(),
            model: "gemma3:1b".to_string(),
            base_url: "http://localhost:11434".to_string(),
            api_key_env: None,
            max_tokens: 1024,
            timeout_ms: 300_000,
        }
    }
}

impl LlmConfig {
    /// Resolve the API key from the configured environment variable
    ///
    /// Returns `Ok(None)` when no variable is configured. A configured but
    /// unset variable is an error.
    pub fn api_key(&self) -> Result<Option<String>> {
        match &self.api_key_env {
            None => Ok(None),
            Some(var) => std::env::var(var)
                .map(Some)
                .map_err(|_| eyre::eyre!("LLM API key not found. Set the {} environment variable.", var)),
        }
    }
}

/// What the session does when the model call fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnError {
    /// Report the failure, drop the turn, keep reading input
    #[default]
    Continue,
    /// Report the failure and end the session
    Abort,
}

/// Conversation session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Input that ends the session (matched case-insensitively)
    #[serde(rename = "exit-keyword")]
    pub exit_keyword: String,

    /// Recovery policy for failed generation calls
    #[serde(rename = "on-error")]
    pub on_error: OnError,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            exit_keyword: "exit".to_string(),
            on_error: OnError::Continue,
        }
    }
}
