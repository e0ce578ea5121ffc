//! Retry loop: run an async operation until success or policy says stop.

use std::future::Future;
use std::time::Duration;

use super::classify::{classify, HttpStatus};
use super::error::RetryError;
use super::policy::{RetryDecision, RetryPolicy};

/// Runs `f` until it succeeds or the retry policy says to stop.
/// On retryable failure, sleeps for the backoff duration then tries again.
///
/// Attempts are strictly sequential. An operation that fails without ever
/// awaiting (e.g. `async { Err(e) }`) is handled exactly like one that fails
/// after suspending.
pub async fn run_with_retry<T, E, F, Fut>(policy: &RetryPolicy, mut f: F) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: HttpStatus,
{
    if policy.max_attempts == 0 {
        return Err(RetryError::Exhausted);
    }
    let mut attempt = 1u32;
    loop {
        match f().await {
            Ok(v) => return Ok(v),
            Err(e) => {
                let kind = classify(&e);
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => return Err(RetryError::Operation(e)),
                    RetryDecision::RetryAfter(d) => {
                        tokio::time::sleep(d).await;
                        attempt += 1;
                    }
                }
            }
        }
    }
}

/// Convenience form with positional limits: `max_retries` attempts in total,
/// waiting `base_delay_ms * 2^(n-1)` after the n-th failure.
pub async fn upload_with_retry<T, E, F, Fut>(
    operation: F,
    max_retries: u32,
    base_delay_ms: u64,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: HttpStatus,
{
    let policy = RetryPolicy::new(max_retries, Duration::from_millis(base_delay_ms));
    run_with_retry(&policy, operation).await
}
