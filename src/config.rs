use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Remote catalog service endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 { 30 }

/// Where the advisory authentication flag is persisted
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_state_file")]
    pub state_file: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self { state_file: default_state_file() }
    }
}

fn default_state_file() -> String { ".pupfinder-session.toml".to_string() }

/// Gating for the zip-code autocomplete
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_suggest_min_len")]
    pub suggest_min_len: usize,
    #[serde(default = "default_suggest_debounce_ms")]
    pub suggest_debounce_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            suggest_min_len: default_suggest_min_len(),
            suggest_debounce_ms: default_suggest_debounce_ms(),
        }
    }
}

fn default_suggest_min_len() -> usize { 2 }
fn default_suggest_debounce_ms() -> u64 { 300 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: default_log_level(), format: default_log_format() }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with PUPFINDER_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with PUPFINDER_)
            // e.g., PUPFINDER__API__BASE_URL -> api.base_url
            .add_source(
                Environment::with_prefix("PUPFINDER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PUPFINDER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
