//! Per-operation deadline

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::domain::{DomainError, DomainResult};

/// Run `fut` under `timeout`. On expiry the future is dropped, which cancels
/// the in-flight store call, and an `Internal` error is returned.
pub(crate) async fn with_deadline<T, F>(
    timeout: Duration,
    operation: &'static str,
    fut: F,
) -> DomainResult<T>
where
    F: Future<Output = DomainResult<T>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => Err(deadline_exceeded(operation, timeout)),
    }
}

/// Log and build the error for an operation that ran past `timeout`.
pub(crate) fn deadline_exceeded(operation: &'static str, timeout: Duration) -> DomainError {
    warn!(
        operation,
        timeout_ms = timeout.as_millis() as u64,
        "Operation deadline exceeded"
    );
    DomainError::internal(format!(
        "{}: deadline of {:?} exceeded",
        operation, timeout
    ))
}
