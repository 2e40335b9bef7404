//! Retry policy: attempt budget, backoff shape, and error classification

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::backoff::BackoffStrategy;
use crate::error::Retryable;

/// Retry policy for one retry session
///
/// A policy owns the mutable retry counter for a single session and must
/// not be shared between concurrent sessions; each call site constructs
/// its own. The retry loop takes the policy by `&mut`, so the borrow
/// checker rejects accidental sharing.
///
/// Constructor arguments are not validated: a `max_tries` of zero is a
/// policy that never retries, and a zero `init_wait` retries without
/// delay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Maximum number of attempts
    pub max_tries: u32,

    /// Base delay unit between attempts
    #[serde(with = "humantime_serde")]
    pub init_wait: Duration,

    /// Backoff strategy
    pub strategy: BackoffStrategy,

    /// Attempts made so far; runtime state, not configuration
    #[serde(skip)]
    retry_count: u32,

    /// When false, errors are never classified as fatal and only the
    /// attempt budget applies
    #[serde(default = "default_classify")]
    classify: bool,
}

fn default_classify() -> bool {
    true
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(5, Duration::from_millis(500))
    }
}

impl RetryPolicy {
    /// Create a policy with a constant wait between attempts
    pub fn fixed(max_tries: u32, init_wait: Duration) -> Self {
        Self {
            max_tries,
            init_wait,
            strategy: BackoffStrategy::Fixed,
            retry_count: 0,
            classify: true,
        }
    }

    /// Create a policy whose wait grows exponentially with the attempt count
    pub fn exponential(max_tries: u32, init_wait: Duration) -> Self {
        Self {
            max_tries,
            init_wait,
            strategy: BackoffStrategy::Exponential,
            retry_count: 0,
            classify: true,
        }
    }

    /// Create an SLA policy: exponential backoff that retries on every
    /// error kind until the budget is spent, fatal or not
    pub fn sla(max_tries: u32, init_wait: Duration) -> Self {
        Self {
            max_tries,
            init_wait,
            strategy: BackoffStrategy::Exponential,
            retry_count: 0,
            classify: false,
        }
    }

    /// Advisory retry budget as a duration: `init_wait * max_tries`
    ///
    /// Descriptive only; the loop never enforces it as a deadline.
    pub fn max_time(&self) -> Duration {
        self.init_wait * self.max_tries
    }

    /// Delay to apply before the next attempt, as a function of the
    /// retry count at call time
    pub fn current_wait(&self) -> Duration {
        self.strategy.wait(self.init_wait, self.retry_count)
    }

    /// Whether a further attempt is allowed after the given error
    ///
    /// A fatal error forces false regardless of the remaining budget;
    /// otherwise the answer is true exactly while the attempt count is
    /// below `max_tries`.
    pub fn should_retry<E: Retryable>(&self, error: &E) -> bool {
        if self.classify && error.is_fatal() {
            return false;
        }
        self.retry_count < self.max_tries
    }

    /// Record one attempt
    ///
    /// No upper clamp; callers must not call this more times than
    /// attempts made.
    pub fn increment_try(&mut self) {
        self.retry_count += 1;
    }
}
