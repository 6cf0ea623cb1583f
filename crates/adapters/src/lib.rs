//! Router Adapters
//!
//! Provider-specific adapters for the route aggregation service, plus
//! the registry mapping provider ids onto adapter instances.

use std::collections::HashMap;
use std::sync::Arc;

use router_types::{AmmSdkProvider, ProviderId, RouteAdapter};

pub mod client_cache;
pub mod curve;
pub mod enso;
pub mod odos;

pub use client_cache::{ClientCache, ClientConfig};
pub use curve::CurveAdapter;
pub use enso::EnsoAdapter;
pub use odos::OdosAdapter;
pub use router_types::{AdapterError, AdapterResult};

/// Registry of provider adapters, keyed by provider identity
///
/// Heterogeneous backends share one function signature behind the
/// [`RouteAdapter`] trait; selection is a map lookup, not a class
/// hierarchy.
#[derive(Debug, Default)]
pub struct AdapterRegistry {
	adapters: HashMap<ProviderId, Box<dyn RouteAdapter>>,
}

impl AdapterRegistry {
	pub fn new() -> Self {
		Self {
			adapters: HashMap::new(),
		}
	}

	/// Registry with the stock adapters: odos against the configured
	/// base URL, the enso placeholder, and curve when an SDK binding
	/// is available
	pub fn with_defaults(
		odos_base_url: &str,
		sdk_provider: Option<Arc<dyn AmmSdkProvider>>,
	) -> Self {
		let mut registry = Self::new();
		registry.register(Box::new(OdosAdapter::new(odos_base_url)));
		registry.register(Box::new(EnsoAdapter::new()));
		if let Some(provider) = sdk_provider {
			registry.register(Box::new(CurveAdapter::new(provider)));
		}
		registry
	}

	/// Register an adapter under its own provider id, replacing any
	/// previous registration
	pub fn register(&mut self, adapter: Box<dyn RouteAdapter>) {
		self.adapters.insert(adapter.provider(), adapter);
	}

	pub fn get(&self, provider: ProviderId) -> Option<&dyn RouteAdapter> {
		self.adapters.get(&provider).map(|a| a.as_ref())
	}

	pub fn providers(&self) -> Vec<ProviderId> {
		self.adapters.keys().copied().collect()
	}

	pub fn len(&self) -> usize {
		self.adapters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.adapters.is_empty()
	}
}
