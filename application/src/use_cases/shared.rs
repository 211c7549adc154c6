//! Shared utilities for use cases.
//!
//! Cancellation helpers used by the quiz use cases that call the question
//! service.

use crate::use_cases::quiz_error::QuizError;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Check if cancellation has been requested.
///
/// Returns `Err(QuizError::Cancelled)` if the token exists and is cancelled.
pub(crate) fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), QuizError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(QuizError::Cancelled);
    }
    Ok(())
}

/// Drive `fut` to completion unless the token is cancelled first.
///
/// On cancellation the future is dropped, which aborts any in-flight remote
/// request it owns.
pub(crate) async fn cancellable<F: Future>(
    token: &Option<CancellationToken>,
    fut: F,
) -> Result<F::Output, QuizError> {
    check_cancelled(token)?;
    match token {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => Err(QuizError::Cancelled),
            output = fut => Ok(output),
        },
        None => Ok(fut.await),
    }
}
