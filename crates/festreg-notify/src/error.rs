use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while talking to an external mail or SMS API.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The HTTP request never completed.
    #[error("network error: {0}")]
    Network(String),

    /// An attachment could not be read from disk.
    #[error("attachment error: {path}: {source}")]
    Attachment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NotifyError {
    /// Whether a bounded retry policy may re-attempt after this error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NotifyError>;
