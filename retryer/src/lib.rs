//! Retry orchestration for deferred operations
//!
//! This crate wraps fallible async calls in a retry loop driven by a
//! backoff policy: fixed-interval or exponential delays, an attempt
//! budget, and fatal-error classification for failures that carry an
//! HTTP-style response status.

pub mod backoff;
pub mod delay;
pub mod error;
pub mod operation;
pub mod policy;
pub mod retry;

// Re-export commonly used types
pub use backoff::BackoffStrategy;
pub use error::{CallError, Retryable};
pub use operation::{Call, Operation};
pub use policy::RetryPolicy;
pub use retry::retryer;
