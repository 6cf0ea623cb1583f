//! Error types for adapter operations

use thiserror::Error;

use crate::routes::ProviderId;
use crate::sdk::SdkError;

/// Failures a provider adapter can surface to the aggregator
///
/// "Provider has no route" is NOT an error: adapters return an empty
/// vector for that. Everything here means the provider call itself
/// failed and the provider is excluded from the result set.
#[derive(Error, Debug)]
pub enum AdapterError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("HTTP {status} {status_text} from {url}")]
	HttpStatus {
		status: u16,
		status_text: String,
		url: String,
	},

	/// Synthetic failure produced by the timeout wrapper
	#[error("{message}")]
	Timeout { message: String },

	#[error("SDK call failed: {0}")]
	Sdk(#[from] SdkError),

	#[error("invalid response from {provider}: {reason}")]
	InvalidResponse {
		provider: ProviderId,
		reason: String,
	},

	#[error("no adapter registered for provider: {provider}")]
	NotRegistered { provider: ProviderId },

	#[error("provider task failed: {reason}")]
	TaskFailed { reason: String },
}

impl AdapterError {
	/// HTTP status of the failure, when the transport exposed one
	pub fn status_code(&self) -> Option<u16> {
		match self {
			AdapterError::HttpStatus { status, .. } => Some(*status),
			AdapterError::Http(error) => error.status().map(|s| s.as_u16()),
			_ => None,
		}
	}
}
