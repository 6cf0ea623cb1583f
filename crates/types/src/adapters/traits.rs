//! Core adapter trait implemented by every provider

use async_trait::async_trait;
use std::fmt::Debug;

use super::AdapterResult;
use crate::routes::{ProviderId, RouteResponse, RoutesQuery};

/// One pathfinding backend behind a shared signature
///
/// Each adapter translates the canonical query into its provider's
/// native call and maps the native response back into
/// [`RouteResponse`]s. Adapters are pure functions of the query plus
/// their outbound call: no shared mutable state.
///
/// Returning `Ok(vec![])` means the provider legitimately has no route
/// for this query (missing required inputs, or no path exists). An
/// `Err` means the call itself failed and will be logged and excluded
/// by the aggregator.
#[async_trait]
pub trait RouteAdapter: Send + Sync + Debug {
	/// Provider identity, used as the registry key
	fn provider(&self) -> ProviderId;

	/// Fetch candidate routes for the query
	async fn fetch_routes(&self, query: &RoutesQuery) -> AdapterResult<Vec<RouteResponse>>;
}
