//! Shared mocks and fixtures for tests and demos
//!
//! Scriptable stand-ins for the two external seams: provider adapters
//! and the on-chain AMM SDK.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use router_types::{
	AdapterError, AdapterResult, Address, AmmRouterSdk, AmmSdkProvider, Decimal, ProviderId,
	RouteAdapter, RouteResponse, RouteStep, RoutesQuery, SdkBestRoute, SdkError, SdkHop,
	SdkResult,
};

/// USDC on Ethereum mainnet
pub fn usdc() -> Address {
	Address::new("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48").expect("static address")
}

/// USDT on Ethereum mainnet
pub fn usdt() -> Address {
	Address::new("0xdAC17F958D2ee523a2206206994597C13D831ec7").expect("static address")
}

pub fn decimal(value: &str) -> Decimal {
	Decimal::new(value).expect("static decimal")
}

/// A USDC→USDT response template for the given provider
pub fn sample_response(provider: ProviderId, amount_out: &str) -> RouteResponse {
	RouteResponse::new(
		provider,
		decimal("1000000"),
		decimal(amount_out),
		vec![RouteStep::swap(usdc(), usdt(), provider.as_str(), 1)],
	)
}

/// How a [`MockRouteAdapter`] responds
#[derive(Debug, Clone)]
enum MockBehavior {
	Routes(Vec<RouteResponse>),
	Fail(String),
	Hang,
}

/// Scriptable provider adapter with call tracking
#[derive(Debug)]
pub struct MockRouteAdapter {
	provider: ProviderId,
	behavior: MockBehavior,
	delay: Duration,
	calls: Arc<AtomicUsize>,
}

impl MockRouteAdapter {
	/// Respond with clones of the given routes
	pub fn returning(provider: ProviderId, routes: Vec<RouteResponse>) -> Self {
		Self {
			provider,
			behavior: MockBehavior::Routes(routes),
			delay: Duration::ZERO,
			calls: Arc::new(AtomicUsize::new(0)),
		}
	}

	/// Respond with no routes, the legitimate "no path" case
	pub fn empty(provider: ProviderId) -> Self {
		Self::returning(provider, Vec::new())
	}

	/// Fail every call with the given reason
	pub fn failing(provider: ProviderId, reason: impl Into<String>) -> Self {
		Self {
			provider,
			behavior: MockBehavior::Fail(reason.into()),
			delay: Duration::ZERO,
			calls: Arc::new(AtomicUsize::new(0)),
		}
	}

	/// Never resolve within any realistic deadline
	pub fn hanging(provider: ProviderId) -> Self {
		Self {
			provider,
			behavior: MockBehavior::Hang,
			delay: Duration::ZERO,
			calls: Arc::new(AtomicUsize::new(0)),
		}
	}

	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = delay;
		self
	}

	/// Counter shared with clones handed to the registry
	pub fn call_counter(&self) -> Arc<AtomicUsize> {
		self.calls.clone()
	}
}

#[async_trait]
impl RouteAdapter for MockRouteAdapter {
	fn provider(&self) -> ProviderId {
		self.provider
	}

	async fn fetch_routes(&self, _query: &RoutesQuery) -> AdapterResult<Vec<RouteResponse>> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		if !self.delay.is_zero() {
			tokio::time::sleep(self.delay).await;
		}

		match &self.behavior {
			MockBehavior::Routes(routes) => Ok(routes.clone()),
			MockBehavior::Fail(reason) => Err(AdapterError::InvalidResponse {
				provider: self.provider,
				reason: reason.clone(),
			}),
			MockBehavior::Hang => {
				tokio::time::sleep(Duration::from_secs(3600)).await;
				Ok(Vec::new())
			},
		}
	}
}

/// Scriptable on-chain SDK fake for the curve adapter
#[derive(Debug, Default)]
pub struct MockAmmSdk {
	decimals: HashMap<String, u8>,
	route: Option<SdkBestRoute>,
	pool_names: HashMap<String, String>,
	price_impact: f64,
	stored_rate: Option<Decimal>,
}

impl MockAmmSdk {
	/// Mainnet USDC/USDT fake with a single stableswap hop
	pub fn stable_pair(output: &str) -> Self {
		Self::default()
			.with_decimals(&usdc(), 6)
			.with_decimals(&usdt(), 6)
			.with_route(SdkBestRoute {
				hops: vec![SdkHop {
					pool_id: "3pool".to_string(),
					token_in: usdc(),
					token_out: usdt(),
					is_crypto_pool: false,
					swap_params: serde_json::Map::new(),
				}],
				output: decimal(output),
			})
			.with_pool_name("3pool", "Curve.fi DAI/USDC/USDT")
	}

	pub fn with_decimals(mut self, token: &Address, decimals: u8) -> Self {
		self.decimals.insert(token.to_lowercase(), decimals);
		self
	}

	pub fn with_route(mut self, route: SdkBestRoute) -> Self {
		self.route = Some(route);
		self
	}

	pub fn with_pool_name(mut self, pool_id: &str, name: &str) -> Self {
		self.pool_names.insert(pool_id.to_string(), name.to_string());
		self
	}

	pub fn with_price_impact(mut self, price_impact: f64) -> Self {
		self.price_impact = price_impact;
		self
	}

	pub fn with_stored_rate(mut self, stored_rate: Decimal) -> Self {
		self.stored_rate = Some(stored_rate);
		self
	}

	/// Wrap into a provider serving this SDK for every chain
	pub fn into_provider(self) -> Arc<dyn AmmSdkProvider> {
		Arc::new(MockSdkProvider(Arc::new(self)))
	}
}

#[async_trait]
impl AmmRouterSdk for MockAmmSdk {
	async fn token_decimals(&self, token: &Address) -> SdkResult<u8> {
		self.decimals
			.get(&token.to_lowercase())
			.copied()
			.ok_or_else(|| SdkError::UnknownToken {
				address: token.to_string(),
			})
	}

	async fn best_route_and_output(
		&self,
		_token_in: &Address,
		_token_out: &Address,
		_amount_in: &Decimal,
	) -> SdkResult<SdkBestRoute> {
		Ok(self.route.clone().unwrap_or(SdkBestRoute {
			hops: Vec::new(),
			output: decimal("0"),
		}))
	}

	async fn required_amount_in(
		&self,
		_token_in: &Address,
		_token_out: &Address,
		amount_out: &Decimal,
	) -> SdkResult<Decimal> {
		// A flat 0.1% premium over the requested output
		let rate = bigdecimal::BigDecimal::new(bigdecimal::num_bigint::BigInt::from(1001), 3);
		Ok(Decimal::from_bigdecimal(&(amount_out.value() * rate)))
	}

	async fn price_impact(
		&self,
		_token_in: &Address,
		_token_out: &Address,
		_amount_in: &Decimal,
	) -> SdkResult<f64> {
		Ok(self.price_impact)
	}

	async fn pool_name(&self, pool_id: &str) -> SdkResult<String> {
		self.pool_names
			.get(pool_id)
			.cloned()
			.ok_or_else(|| SdkError::PoolNotFound {
				pool_id: pool_id.to_string(),
			})
	}

	async fn stored_rate(&self, _pool_id: &str, _token: &Address) -> SdkResult<Option<Decimal>> {
		Ok(self.stored_rate.clone())
	}
}

/// Serves one SDK instance for every chain id
#[derive(Debug)]
struct MockSdkProvider(Arc<MockAmmSdk>);

#[async_trait]
impl AmmSdkProvider for MockSdkProvider {
	async fn sdk_for_chain(&self, _chain_id: u64) -> SdkResult<Arc<dyn AmmRouterSdk>> {
		let sdk: Arc<dyn AmmRouterSdk> = self.0.clone();
		Ok(sdk)
	}
}
