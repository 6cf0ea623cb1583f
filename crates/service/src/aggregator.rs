//! Core aggregation service logic

use std::sync::Arc;

use futures::future::join_all;
use thiserror::Error;
use tracing::{debug, error, info};

use router_adapters::AdapterRegistry;
use router_types::{AdapterError, ProviderId, RouteResponse, RoutesQuery};

use crate::timeout::with_timeout;

/// Errors surfaced when a route request cannot produce any result
#[derive(Error, Debug)]
pub enum AggregatorServiceError {
	/// Single requested provider failed: the original failure is
	/// passed through unchanged so callers can match on it
	#[error(transparent)]
	Provider(#[from] AdapterError),

	/// Every one of several requested providers failed
	#[error("Failed to calculate route for {providers}: {reasons}")]
	AllProvidersFailed { providers: String, reasons: String },
}

/// Result type for aggregator operations
pub type AggregatorResult<T> = Result<T, AggregatorServiceError>;

/// Service fanning a route query out to the requested providers
///
/// Every provider gets a full chance to respond or time out; the
/// request never short-circuits on the first failure or first success.
/// Partial failure is normal operation: failures are logged and the
/// survivors ranked. Only a total failure propagates as an error.
pub struct AggregatorService {
	registry: Arc<AdapterRegistry>,
	provider_timeout_ms: u64,
}

impl AggregatorService {
	pub fn new(registry: Arc<AdapterRegistry>, provider_timeout_ms: u64) -> Self {
		Self {
			registry,
			provider_timeout_ms,
		}
	}

	pub fn provider_timeout_ms(&self) -> u64 {
		self.provider_timeout_ms
	}

	/// Fetch, merge and rank routes from the requested providers
	pub async fn get_routes(&self, query: &RoutesQuery) -> AggregatorResult<Vec<RouteResponse>> {
		let providers = &query.routers;
		info!(
			providers = %display_providers(providers),
			chain_id = query.chain_id,
			"fetching routes"
		);

		let tasks = providers.iter().map(|&provider| {
			let registry = Arc::clone(&self.registry);
			let query = query.clone();
			let timeout_ms = self.provider_timeout_ms;

			async move {
				let message = format!("{provider} route lookup timed out after {timeout_ms}ms");
				let result = with_timeout(
					async move {
						match registry.get(provider) {
							Some(adapter) => adapter.fetch_routes(&query).await,
							None => Err(AdapterError::NotRegistered { provider }),
						}
					},
					timeout_ms,
					message,
				)
				.await;
				(provider, result)
			}
		});

		// Settle every branch; timeouts and failures resolve to errors
		// rather than aborting the join.
		let outcomes = join_all(tasks).await;

		let mut routes: Vec<RouteResponse> = Vec::new();
		let mut failures: Vec<(ProviderId, AdapterError)> = Vec::new();

		for (provider, result) in outcomes {
			match result {
				Ok(provider_routes) => {
					debug!(
						provider = %provider,
						routes = provider_routes.len(),
						"provider responded"
					);
					routes.extend(provider_routes);
				},
				Err(failure) => {
					error!(provider = %provider, error = %failure, "provider failed");
					failures.push((provider, failure));
				},
			}
		}

		if failures.len() == providers.len() && !failures.is_empty() {
			return Err(total_failure(failures));
		}

		rank_routes(&mut routes);

		info!(
			query = %serde_json::to_string(query).unwrap_or_default(),
			result = %serde_json::to_string(&routes).unwrap_or_default(),
			"routes computed"
		);

		Ok(routes)
	}
}

/// Stable descending sort by the best output amount of each response,
/// compared exactly; ties keep their input order
fn rank_routes(routes: &mut [RouteResponse]) {
	routes.sort_by(|a, b| b.best_amount_out().cmp(&a.best_amount_out()));
}

fn total_failure(mut failures: Vec<(ProviderId, AdapterError)>) -> AggregatorServiceError {
	if failures.len() == 1 {
		let (_, failure) = failures.remove(0);
		return AggregatorServiceError::Provider(failure);
	}

	let providers = failures
		.iter()
		.map(|(provider, _)| provider.as_str())
		.collect::<Vec<_>>()
		.join(", ");
	let reasons = failures
		.iter()
		.map(|(_, failure)| failure.to_string())
		.collect::<Vec<_>>()
		.join("; ");

	AggregatorServiceError::AllProvidersFailed { providers, reasons }
}

fn display_providers(providers: &[ProviderId]) -> String {
	providers
		.iter()
		.map(ProviderId::as_str)
		.collect::<Vec<_>>()
		.join(", ")
}
