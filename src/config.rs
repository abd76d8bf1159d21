//! Configuration
//!
//! Read from `<config_dir>/medsearch/config.toml`, then overridden by
//! `MEDSEARCH_*` environment variables. Every field has a default so a
//! missing file is not an error.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_SUGGESTIONS_URL: &str = "http://127.0.0.1:5000/api/suggestions";
pub const DEFAULT_SEARCH_URL: &str = "http://127.0.0.1:5000/search";

const ENV_SUGGESTIONS_URL: &str = "MEDSEARCH_SUGGESTIONS_URL";
const ENV_SEARCH_URL: &str = "MEDSEARCH_SEARCH_URL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Autocomplete endpoint, queried with `?q=<term>`
    pub suggestions_url: String,
    /// Search results page, opened with `?q=<term>`
    pub search_url: String,
    pub debounce_ms: u64,
    /// 0 disables the timeout
    pub request_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suggestions_url: DEFAULT_SUGGESTIONS_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            debounce_ms: 300,
            request_timeout_ms: 5000,
        }
    }
}

impl Config {
    /// Load the user config, falling back to defaults on any problem.
    pub fn load() -> Self {
        let config = match Self::default_path() {
            Some(path) if path.exists() => Self::from_path(&path).unwrap_or_else(|e| {
                tracing::warn!("{} (using defaults)", e);
                Self::default()
            }),
            _ => Self::default(),
        };

        let config = config.with_env(|key| std::env::var(key).ok());
        if let Err(e) = config.validate() {
            tracing::warn!("{} (using default endpoints)", e);
            return Self {
                suggestions_url: DEFAULT_SUGGESTIONS_URL.to_string(),
                search_url: DEFAULT_SEARCH_URL.to_string(),
                ..config
            };
        }
        config
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("medsearch").join("config.toml"))
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides through `lookup`.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_SUGGESTIONS_URL) {
            self.suggestions_url = url;
        }
        if let Some(url) = lookup(ENV_SEARCH_URL) {
            self.search_url = url;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suggestions_url.trim().is_empty() {
            return Err(ConfigError::MissingUrl("suggestions_url"));
        }
        if self.search_url.trim().is_empty() {
            return Err(ConfigError::MissingUrl("search_url"));
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}
