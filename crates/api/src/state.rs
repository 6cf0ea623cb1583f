use std::sync::Arc;
use std::time::Instant;

use router_config::Settings;
use router_service::AggregatorService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub aggregator: Arc<AggregatorService>,
	pub service_name: String,
	pub environment: String,
	pub started_at: Instant,
}

impl AppState {
	pub fn new(aggregator: Arc<AggregatorService>, settings: &Settings) -> Self {
		Self {
			aggregator,
			service_name: settings.service.name.clone(),
			environment: settings.service.environment.as_str().to_string(),
			started_at: Instant::now(),
		}
	}
}
