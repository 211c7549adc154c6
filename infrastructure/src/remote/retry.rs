//! Timeout-bounded attempts with exponential backoff.

use quizhive_application::CallPolicy;
use std::future::Future;
use tracing::{debug, warn};

/// Why a single attempt failed.
#[derive(Debug)]
pub(crate) enum CallFailure {
    /// Worth retrying: connection refused, reset, 5xx, unreadable body.
    Transient(String),
    /// The question service answered with a client error. Never retried.
    Permanent(String),
}

/// Result of running an operation under a [`CallPolicy`].
#[derive(Debug)]
pub(crate) enum RetryOutcome<T> {
    Done(T),
    GaveUp { attempts: u32, last_error: String },
}

/// Run `call` until it succeeds, fails permanently, or the policy is exhausted.
///
/// Each attempt is bounded by `policy.timeout`; an attempt that times out
/// counts as a transient failure.
pub(crate) async fn with_retry<T, F, Fut>(
    operation: &str,
    policy: &CallPolicy,
    mut call: F,
) -> RetryOutcome<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CallFailure>>,
{
    let mut attempt = 1;
    loop {
        let failure = match tokio::time::timeout(policy.timeout, call()).await {
            Ok(Ok(value)) => {
                debug!("{} succeeded on attempt {}", operation, attempt);
                return RetryOutcome::Done(value);
            }
            Ok(Err(CallFailure::Permanent(msg))) => {
                debug!("{} attempt {} failed permanently: {}", operation, attempt, msg);
                return RetryOutcome::GaveUp {
                    attempts: attempt,
                    last_error: msg,
                };
            }
            Ok(Err(CallFailure::Transient(msg))) => msg,
            Err(_) => format!("timed out after {}ms", policy.timeout.as_millis()),
        };

        match policy.retry.delay_after(attempt) {
            Some(delay) => {
                warn!(
                    "{} attempt {}/{} failed: {}; retrying in {}ms",
                    operation,
                    attempt,
                    policy.retry.attempts(),
                    failure,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            None => {
                return RetryOutcome::GaveUp {
                    attempts: attempt,
                    last_error: failure,
                };
            }
        }
    }
}
