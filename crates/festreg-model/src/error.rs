use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist or cannot be opened.
    #[error("config file not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON.
    #[error("config parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A key required by the running command is absent.
    #[error("missing config key: {0}")]
    MissingKey(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
