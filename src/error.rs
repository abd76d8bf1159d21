//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// A suggestion lookup that could not produce a list.
///
/// Every variant is the same failure as far as the search input is
/// concerned: the suggestions are cleared and the cause is logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("suggestion lookup failed: {0}")]
    Transport(String),

    #[error("suggestion lookup failed: backend answered {0}")]
    Status(reqwest::StatusCode),

    #[error("suggestion lookup failed: malformed response: {0}")]
    Decode(String),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0} is empty")]
    MissingUrl(&'static str),
}
