//! Bounded retry for notification sends.

use tracing::warn;

use crate::error::{NotifyError, Result};

/// How many times a send may be attempted.
///
/// The default of one attempt preserves the historical fire-and-log
/// behavior; operators opt into retries per run.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 1 }
    }
}

impl RetryPolicy {
    /// A policy with at least one attempt.
    pub fn bounded(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    /// Run an operation, re-attempting transport failures up to the bound.
    pub fn run<T>(&self, mut op: impl FnMut() -> Result<T>) -> Result<T> {
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            match op() {
                Err(err) if err.is_retryable() && attempt < self.max_attempts => {
                    warn!(attempt, error = %err, "send failed, retrying");
                }
                other => return other,
            }
        }
    }
}
