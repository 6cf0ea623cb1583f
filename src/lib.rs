//! Router Aggregator
//!
//! A multi-provider swap route aggregation service: fans a route query
//! out to pathfinding backends (`curve`, `enso`, `odos`), normalizes
//! their heterogeneous responses into one schema, tolerates partial
//! failure, and ranks results by output amount.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

// Core domain types
pub use router_types::{
	AdapterError, AdapterResult, Address, AmmRouterSdk, AmmSdkProvider, Decimal, ProviderId,
	RouteAdapter, RouteResponse, RouteStep, RouteTx, RouteWarning, RoutesQuery, SdkBestRoute,
	SdkError, SdkHop, SdkResult,
};

// Service layer
pub use router_service::{AggregatorService, AggregatorServiceError, with_timeout};

// Adapters
pub use router_adapters::{
	AdapterRegistry, ClientCache, CurveAdapter, EnsoAdapter, OdosAdapter,
};

// API layer
pub use router_api::{create_router, AppState, ValidationError};

// Config
pub use router_config::{load_config, log_service_info, log_startup_complete, Settings};

// Module aliases for qualified access
pub mod types {
	pub use router_types::*;
}

pub mod service {
	pub use router_service::*;
}

pub mod adapters {
	pub use router_adapters::*;
}

pub mod api {
	pub use router_api::*;
}

pub mod config {
	pub use router_config::*;
}

pub mod mocks;

// Re-export external dependencies used at integration seams
pub use async_trait;
pub use reqwest;

/// Install the global tracing subscriber from settings
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_tracing(settings: &Settings) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone()));
	tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builder wiring settings, adapters and the SDK binding into a
/// runnable service
///
/// ```rust,no_run
/// use router_aggregator::AggregatorBuilder;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let (router, state) = AggregatorBuilder::new().start().await?;
/// # Ok(())
/// # }
/// ```
pub struct AggregatorBuilder {
	settings: Settings,
	adapters: Vec<Box<dyn RouteAdapter>>,
	sdk_provider: Option<Arc<dyn AmmSdkProvider>>,
}

impl Default for AggregatorBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl AggregatorBuilder {
	pub fn new() -> Self {
		Self {
			settings: Settings::default(),
			adapters: Vec::new(),
			sdk_provider: None,
		}
	}

	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = settings;
		self
	}

	/// Register a custom adapter, replacing the stock one for the same
	/// provider. Tests use this to inject fakes.
	pub fn with_adapter(mut self, adapter: Box<dyn RouteAdapter>) -> Self {
		self.adapters.push(adapter);
		self
	}

	/// Bind the on-chain AMM SDK; without it the curve provider stays
	/// unregistered and curve requests fail as provider failures
	pub fn with_sdk_provider(mut self, provider: Arc<dyn AmmSdkProvider>) -> Self {
		self.sdk_provider = Some(provider);
		self
	}

	/// Assemble the router and shared state without binding a socket
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let mut registry = AdapterRegistry::with_defaults(
			&self.settings.providers.odos.base_url,
			self.sdk_provider,
		);
		for adapter in self.adapters {
			registry.register(adapter);
		}

		let aggregator = Arc::new(AggregatorService::new(
			Arc::new(registry),
			self.settings.timeouts.per_provider_ms,
		));
		let state = AppState::new(aggregator, &self.settings);
		let router = create_router().with_state(state.clone());
		Ok((router, state))
	}

	/// Bind the configured address and serve until shutdown
	pub async fn start_server(self) -> Result<(), Box<dyn std::error::Error>> {
		let settings = self.settings.clone();
		log_service_info(&settings);

		let (router, _state) = self.start().await?;

		let bind_address = settings.server.bind_address();
		let listener = tokio::net::TcpListener::bind(&bind_address).await?;
		log_startup_complete(&bind_address);

		axum::serve(listener, router).await?;
		Ok(())
	}
}
