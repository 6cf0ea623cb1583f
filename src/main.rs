//! Router API Server
//!
//! Main entry point for the route aggregation server

use router_aggregator::AggregatorBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let settings = router_aggregator::load_config()?;
	router_aggregator::init_tracing(&settings);

	AggregatorBuilder::new()
		.with_settings(settings)
		.start_server()
		.await
}
