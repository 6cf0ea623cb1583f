//! Deadline wrapper for provider calls
//!
//! Races an adapter call against a timer. When the timer fires first
//! the caller observes a typed timeout failure; the underlying call is
//! detached, not aborted: it keeps running to completion on its own
//! task and its late result is discarded. Correctness only requires
//! not blocking the aggregate response, not killing the in-flight
//! request.

use std::future::Future;
use std::time::Duration;

use router_types::{AdapterError, AdapterResult};

/// Run `future` with a deadline of `timeout_ms`
///
/// On expiry the returned error carries `message` verbatim, so callers
/// can attach provider-specific context.
pub async fn with_timeout<T, F>(future: F, timeout_ms: u64, message: String) -> AdapterResult<T>
where
	F: Future<Output = AdapterResult<T>> + Send + 'static,
	T: Send + 'static,
{
	// Spawning keeps the call alive past the deadline; dropping the
	// JoinHandle detaches it instead of cancelling it.
	let handle = tokio::spawn(future);

	match tokio::time::timeout(Duration::from_millis(timeout_ms), handle).await {
		Ok(Ok(result)) => result,
		Ok(Err(join_error)) => Err(AdapterError::TaskFailed {
			reason: join_error.to_string(),
		}),
		Err(_) => Err(AdapterError::Timeout { message }),
	}
}
