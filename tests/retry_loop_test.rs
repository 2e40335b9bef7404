//! End-to-end retry loop behavior, timed against tokio's paused clock
//!
//! With `start_paused`, sleeps auto-advance the clock, so the elapsed
//! time measures exactly how long the loop delayed between attempts.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use retryer::{retryer, Call, CallError, RetryPolicy};

#[tokio::test(start_paused = true)]
async fn successful_call_never_delays() {
    let start = tokio::time::Instant::now();

    let call = Call::new(|_: Option<()>| async { Ok::<_, CallError>("user settings") });
    let mut policy = RetryPolicy::fixed(5, Duration::from_millis(500));

    let result = retryer(&call, &mut policy).await;

    assert_eq!(result, Some("user settings"));
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn transient_failure_delays_exactly_once() {
    let start = tokio::time::Instant::now();
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();

    let call = Call::new(move |_: Option<()>| {
        let counter = counter.clone();
        async move {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(CallError::Transport("connection reset".to_string()))
            } else {
                Ok("user settings")
            }
        }
    });
    let mut policy = RetryPolicy::fixed(2, Duration::from_millis(100));

    let result = retryer(&call, &mut policy).await;

    assert_eq!(result, Some("user settings"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(start.elapsed(), Duration::from_millis(100));
}

#[tokio::test(start_paused = true)]
async fn exponential_waits_grow_with_the_attempt_count() {
    let start = tokio::time::Instant::now();
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();

    let call = Call::new(move |_: Option<()>| {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>(CallError::Transport("timed out".to_string()))
        }
    });
    let mut policy = RetryPolicy::exponential(3, Duration::from_millis(10));

    let result = retryer(&call, &mut policy).await;

    assert_eq!(result, None);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    // 10^1 ms after the first failure, 10^2 ms after the second
    assert_eq!(start.elapsed(), Duration::from_millis(110));
}

#[tokio::test(start_paused = true)]
async fn fatal_failure_stops_without_delaying() {
    let start = tokio::time::Instant::now();
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();

    let call = Call::new(move |_: Option<()>| {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>(CallError::Status { status: 404 })
        }
    });
    let mut policy = RetryPolicy::fixed(5, Duration::from_millis(500));

    let result = retryer(&call, &mut policy).await;

    assert_eq!(result, None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn sla_policy_retries_through_fatal_errors() {
    let start = tokio::time::Instant::now();
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();

    let call = Call::new(move |_: Option<()>| {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>(CallError::Status { status: 503 })
        }
    });
    let mut policy = RetryPolicy::sla(3, Duration::from_millis(1));

    let result = retryer(&call, &mut policy).await;

    assert_eq!(result, None);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    // 1^1 ms and 1^2 ms waits
    assert_eq!(start.elapsed(), Duration::from_millis(2));
}

#[tokio::test]
async fn bound_payload_is_used_on_every_attempt() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();

    let call = Call::bound(
        move |payload: Option<&'static str>| {
            let counter = counter.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(CallError::Transport("connection reset".to_string()))
                } else {
                    Ok(payload.unwrap_or("nobody"))
                }
            }
        },
        "user-42",
    );
    let mut policy = RetryPolicy::fixed(2, Duration::ZERO);

    let result = retryer(&call, &mut policy).await;

    assert_eq!(result, Some("user-42"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
