//! Backoff strategies for retry policies

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backoff strategy for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackoffStrategy {
    /// Fixed delay between retries
    Fixed,

    /// Exponential increase: delay in milliseconds = init_wait_ms ^ retry_count
    Exponential,
}

impl BackoffStrategy {
    /// Calculate the wait before the next attempt, given the retry count
    /// at call time.
    ///
    /// For the exponential strategy the exponent is the raw counter, so a
    /// count of 0 yields a 1 ms wait (base^0). Arithmetic saturates
    /// rather than overflowing for large counts.
    pub fn wait(&self, init_wait: Duration, retry_count: u32) -> Duration {
        match self {
            BackoffStrategy::Fixed => init_wait,
            BackoffStrategy::Exponential => {
                let base_ms = init_wait.as_millis() as u64;
                Duration::from_millis(base_ms.saturating_pow(retry_count))
            }
        }
    }
}
