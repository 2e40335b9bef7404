//! The retry loop

use log::{debug, info, warn};
use std::fmt::Display;

use crate::delay::delay;
use crate::error::Retryable;
use crate::operation::Operation;
use crate::policy::RetryPolicy;

/// Drive an operation against a policy until it succeeds, the failure is
/// fatal, or the attempt budget is spent
///
/// Returns `Some(result)` on the first success. Returns `None` when the
/// policy stops the loop; the triggering error is logged and discarded,
/// and the caller cannot tell a fatal stop from exhaustion. A policy
/// that always allows another attempt loops until the operation
/// succeeds; providing a terminating policy is the caller's
/// responsibility.
///
/// Attempts are strictly sequential. The only suspension points are the
/// operation's own await and the wait between attempts.
pub async fn retryer<O>(operation: &O, policy: &mut RetryPolicy) -> Option<O::Output>
where
    O: Operation,
    O::Error: Retryable + Display,
{
    let mut attempt: u32 = 0;

    loop {
        policy.increment_try();
        attempt += 1;
        debug!("Executing attempt {} of {}", attempt, policy.max_tries);

        match operation.execute().await {
            Ok(result) => {
                if attempt > 1 {
                    info!("Operation succeeded after {} attempts", attempt);
                }
                return Some(result);
            }
            Err(error) => {
                if !policy.should_retry(&error) {
                    warn!("Operation stopped after {} attempts: {}", attempt, error);
                    return None;
                }

                let wait = policy.current_wait();
                warn!("Attempt {} failed: {}. Retrying in {:?}", attempt, error, wait);
                delay(wait).await;
            }
        }
    }
}
