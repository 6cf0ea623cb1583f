//! HTTP client cache for optimized connection management
//!
//! Provides per-provider client instances with connection pooling and
//! keep-alive optimization.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use reqwest::{Client, ClientBuilder};
use router_types::{AdapterError, AdapterResult, ProviderId};
use tracing::{debug, warn};

/// Configuration for creating optimized HTTP clients
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientConfig {
	/// Provider identity for cache differentiation
	pub provider: ProviderId,
	/// Base endpoint for the provider
	pub base_url: String,
	/// Maximum number of idle connections per host
	pub max_idle_per_host: usize,
	/// Connection keep-alive timeout
	pub keep_alive_timeout_ms: u64,
}

impl ClientConfig {
	pub fn new(provider: ProviderId, base_url: impl Into<String>) -> Self {
		Self {
			provider,
			base_url: base_url.into(),
			max_idle_per_host: 10,
			keep_alive_timeout_ms: 90_000,
		}
	}
}

/// Cached client with creation timestamp for TTL management
#[derive(Debug, Clone)]
struct CachedClient {
	client: Arc<Client>,
	created_at: Instant,
}

impl CachedClient {
	fn new(client: Client) -> Self {
		Self {
			client: Arc::new(client),
			created_at: Instant::now(),
		}
	}

	fn is_expired(&self, ttl: Duration) -> bool {
		self.created_at.elapsed() > ttl
	}
}

/// Thread-safe cache of HTTP clients keyed by provider configuration
#[derive(Clone, Debug)]
pub struct ClientCache {
	clients: Arc<DashMap<ClientConfig, CachedClient>>,
	ttl: Duration,
}

impl ClientCache {
	/// Create a new client cache with default 30-minute TTL
	pub fn new() -> Self {
		Self::with_ttl(Duration::from_secs(30 * 60))
	}

	/// Create a new client cache with custom TTL
	pub fn with_ttl(ttl: Duration) -> Self {
		Self {
			clients: Arc::new(DashMap::new()),
			ttl,
		}
	}

	/// Get or create an optimized client for the given configuration
	pub fn get_client(&self, config: &ClientConfig) -> AdapterResult<Arc<Client>> {
		// Atomic check and potential removal of an expired client
		self.clients.remove_if(config, |_, cached| {
			let is_expired = cached.is_expired(self.ttl);
			if is_expired {
				warn!(
					"Client cache expired for {} (age: {:?}), will create new client",
					config.base_url,
					cached.created_at.elapsed()
				);
			}
			is_expired
		});

		if let Some(cached) = self.clients.get(config) {
			debug!(
				"Reusing cached client for {} (age: {:?})",
				config.base_url,
				cached.created_at.elapsed()
			);
			return Ok(cached.client.clone());
		}

		debug!("Creating new optimized client for {}", config.base_url);
		let cached = CachedClient::new(create_optimized_client(config)?);
		let client = cached.client.clone();

		use dashmap::mapref::entry::Entry;
		match self.clients.entry(config.clone()) {
			Entry::Occupied(entry) => {
				// Another task won the race, use its client
				Ok(entry.get().client.clone())
			},
			Entry::Vacant(entry) => {
				entry.insert(cached);
				Ok(client)
			},
		}
	}

	/// Convenience constructor for adapter implementations, sharing the
	/// process-wide cache
	pub fn for_adapter() -> Self {
		GLOBAL_CLIENT_CACHE.clone()
	}

	pub fn ttl(&self) -> Duration {
		self.ttl
	}
}

impl Default for ClientCache {
	fn default() -> Self {
		Self::new()
	}
}

fn create_optimized_client(config: &ClientConfig) -> AdapterResult<Client> {
	let mut headers = reqwest::header::HeaderMap::new();
	headers.insert(
		reqwest::header::ACCEPT,
		reqwest::header::HeaderValue::from_static("application/json"),
	);
	headers.insert(
		reqwest::header::USER_AGENT,
		reqwest::header::HeaderValue::from_static("router-api/1.0"),
	);

	ClientBuilder::new()
		.pool_max_idle_per_host(config.max_idle_per_host)
		.pool_idle_timeout(Duration::from_millis(config.keep_alive_timeout_ms))
		.tcp_keepalive(Duration::from_secs(60))
		.default_headers(headers)
		.build()
		.map_err(AdapterError::Http)
}

lazy_static::lazy_static! {
	static ref GLOBAL_CLIENT_CACHE: ClientCache = ClientCache::new();
}

#[cfg(test)]
mod tests {
	use super::*;

	fn test_config(base_url: &str) -> ClientConfig {
		ClientConfig::new(ProviderId::Odos, base_url)
	}

	#[tokio::test]
	async fn cache_reuses_clients_for_identical_configs() {
		let cache = ClientCache::new();
		let config = test_config("https://test.example");

		let client1 = cache.get_client(&config).unwrap();
		let client2 = cache.get_client(&config).unwrap();
		assert!(Arc::ptr_eq(&client1, &client2));
	}

	#[tokio::test]
	async fn cache_recreates_clients_after_ttl() {
		let cache = ClientCache::with_ttl(Duration::from_millis(50));
		let config = test_config("https://ttl.example");

		let client1 = cache.get_client(&config).unwrap();
		tokio::time::sleep(Duration::from_millis(100)).await;
		let client2 = cache.get_client(&config).unwrap();
		assert!(!Arc::ptr_eq(&client1, &client2));
	}

	#[tokio::test]
	async fn distinct_base_urls_get_distinct_clients() {
		let cache = ClientCache::new();
		let client1 = cache.get_client(&test_config("https://a.example")).unwrap();
		let client2 = cache.get_client(&test_config("https://b.example")).unwrap();
		assert!(!Arc::ptr_eq(&client1, &client2));
	}

	#[test]
	fn clones_share_the_underlying_cache() {
		let cache1 = ClientCache::new();
		let cache2 = cache1.clone();
		let config = test_config("https://clone.example");

		let client1 = cache1.get_client(&config).unwrap();
		let client2 = cache2.get_client(&config).unwrap();
		assert!(Arc::ptr_eq(&client1, &client2));
	}
}
