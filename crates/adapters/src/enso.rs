//! Enso adapter placeholder

use async_trait::async_trait;
use tracing::debug;

use router_types::{AdapterResult, ProviderId, RouteAdapter, RouteResponse, RoutesQuery};

/// Enso pathfinding adapter
///
/// Not wired to the Enso route API yet: reports no routes for every
/// query. A real implementation keeps the same split as the other
/// adapters (empty vector when no route exists, error on transport
/// failures) and, like odos, requires `amountIn` to quote.
#[derive(Debug, Default)]
pub struct EnsoAdapter;

impl EnsoAdapter {
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl RouteAdapter for EnsoAdapter {
	fn provider(&self) -> ProviderId {
		ProviderId::Enso
	}

	async fn fetch_routes(&self, query: &RoutesQuery) -> AdapterResult<Vec<RouteResponse>> {
		debug!(chain_id = query.chain_id, "enso adapter is not implemented, returning no routes");
		Ok(Vec::new())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use router_types::{Address, Decimal};

	#[tokio::test]
	async fn always_reports_no_routes() {
		let adapter = EnsoAdapter::new();
		let query = RoutesQuery::new(
			Address::new("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48").unwrap(),
			Address::new("0xdAC17F958D2ee523a2206206994597C13D831ec7").unwrap(),
		)
		.with_amount_in(Decimal::new("1000").unwrap());

		assert!(adapter.fetch_routes(&query).await.unwrap().is_empty());
	}
}
