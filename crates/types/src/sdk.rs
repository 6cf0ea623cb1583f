//! On-chain AMM router SDK collaborator interface
//!
//! The on-chain SDK is an external collaborator: this service only
//! depends on the shapes below. Deployments bind a real implementation
//! through the builder; tests inject fakes.

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

use crate::primitives::{Address, Decimal};

/// Result type for SDK calls
pub type SdkResult<T> = Result<T, SdkError>;

/// Failures surfaced by the on-chain SDK
#[derive(Error, Debug)]
pub enum SdkError {
	#[error("unsupported chain: {chain_id}")]
	UnsupportedChain { chain_id: u64 },

	#[error("pool not found: {pool_id}")]
	PoolNotFound { pool_id: String },

	#[error("unknown token: {address}")]
	UnknownToken { address: String },

	#[error("rpc call failed: {reason}")]
	Rpc { reason: String },
}

/// One hop of an SDK-computed route
#[derive(Debug, Clone)]
pub struct SdkHop {
	/// Pool identifier as the SDK knows it
	pub pool_id: String,
	pub token_in: Address,
	pub token_out: Address,
	/// Whether the hop touches a volatile-asset ("crypto") pool, as
	/// opposed to a stableswap pool for like-valued assets
	pub is_crypto_pool: bool,
	/// Raw swap parameters the SDK attaches to the hop
	pub swap_params: serde_json::Map<String, serde_json::Value>,
}

/// Best route found by the SDK, output in token units (not wei)
#[derive(Debug, Clone)]
pub struct SdkBestRoute {
	pub hops: Vec<SdkHop>,
	pub output: Decimal,
}

/// Per-chain on-chain router SDK surface consumed by the curve adapter
#[async_trait]
pub trait AmmRouterSdk: Send + Sync + Debug {
	/// Decimals of a token, from the SDK's network constants
	async fn token_decimals(&self, token: &Address) -> SdkResult<u8>;

	/// Best-route search; an empty hop list means no path exists
	async fn best_route_and_output(
		&self,
		token_in: &Address,
		token_out: &Address,
		amount_in: &Decimal,
	) -> SdkResult<SdkBestRoute>;

	/// Back-solve the input amount needed to obtain `amount_out`
	async fn required_amount_in(
		&self,
		token_in: &Address,
		token_out: &Address,
		amount_out: &Decimal,
	) -> SdkResult<Decimal>;

	/// Price impact of the trade, as a percentage
	async fn price_impact(
		&self,
		token_in: &Address,
		token_out: &Address,
		amount_in: &Decimal,
	) -> SdkResult<f64>;

	/// Human-readable pool name for a pool id
	async fn pool_name(&self, pool_id: &str) -> SdkResult<String>;

	/// Stored on-chain exchange rate of `token` in the given pool, if
	/// the pool exposes one (oracle/ERC4626-wrapped tokens)
	async fn stored_rate(&self, pool_id: &str, token: &Address) -> SdkResult<Option<Decimal>>;
}

/// Lookup of per-chain SDK instances
///
/// Implementations are expected to cache instances per chain; the
/// adapter calls this once per request.
#[async_trait]
pub trait AmmSdkProvider: Send + Sync + Debug {
	async fn sdk_for_chain(&self, chain_id: u64) -> SdkResult<Arc<dyn AmmRouterSdk>>;
}
