//! Deadline enforcement for storage calls.
//!
//! No core operation may block indefinitely: every store future is raced
//! against a deadline and an expiry becomes `StoreError::Timeout`.

use crate::errors::StoreError;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Runs `fut` with a deadline, mapping expiry to `StoreError::Timeout`.
pub async fn with_deadline<T, F>(
    operation: &'static str,
    deadline: Duration,
    fut: F,
) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result,
        Err(_) => {
            let elapsed_ms = deadline.as_millis() as u64;
            warn!(operation, elapsed_ms, "Store call exceeded deadline");
            Err(StoreError::Timeout {
                operation,
                elapsed_ms,
            })
        }
    }
}
