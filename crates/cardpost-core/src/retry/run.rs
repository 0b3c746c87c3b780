//! Retry loop: run a closure until success, a non-retryable error, or exhaustion.

use std::fmt;

use super::classify::{Classify, RetryOn};
use super::policy::{RetryDecision, RetryPolicy};

/// Runs `f` until it succeeds or the policy says to stop.
///
/// `is_retryable` decides which errors may be retried; anything else is
/// returned from the failing attempt untouched. On exhaustion the last error is
/// returned unchanged. `op` names the operation in log events.
pub fn run_with_retry<T, E, F, P>(
    policy: &RetryPolicy,
    op: &str,
    is_retryable: P,
    mut f: F,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    P: Fn(&E) -> bool,
    E: fmt::Display,
{
    let mut attempt = 1u32;
    loop {
        let e = match f() {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };
        match policy.decide(attempt, is_retryable(&e)) {
            RetryDecision::NoRetry => return Err(e),
            RetryDecision::Exhausted => {
                tracing::warn!(
                    op,
                    max_attempts = policy.max_attempts,
                    error = %e,
                    "no more attempts, retry limit reached"
                );
                return Err(e);
            }
            RetryDecision::RetryAfter(d) => {
                tracing::error!(
                    op,
                    attempt,
                    error_type = std::any::type_name::<E>(),
                    error = %e,
                    "execution attempt failed"
                );
                attempt += 1;
                tracing::info!(
                    op,
                    delay_ms = d.as_millis() as u64,
                    next_attempt = attempt,
                    "waiting before next attempt"
                );
                if !d.is_zero() {
                    std::thread::sleep(d);
                }
            }
        }
    }
}

/// `run_with_retry` with the retryable predicate taken from a closed set of error kinds.
pub fn run_classified<T, E, F>(
    policy: &RetryPolicy,
    op: &str,
    retry_on: &RetryOn,
    f: F,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: Classify + fmt::Display,
{
    run_with_retry(policy, op, |e: &E| retry_on.matches(e), f)
}
