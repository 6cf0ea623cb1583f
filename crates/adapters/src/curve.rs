//! Curve adapter: on-chain AMM router SDK delegation

use async_trait::async_trait;
use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use router_types::{
	AdapterResult, AmmRouterSdk, AmmSdkProvider, Decimal, ProviderId, RouteAdapter, RouteResponse,
	RouteStep, RouteWarning, RoutesQuery, SdkHop,
};

/// Exchange-rate threshold for stableswap warning detection.
///
/// 98/100, built exactly rather than parsed from a float.
fn low_exchange_rate_threshold() -> BigDecimal {
	BigDecimal::new(BigInt::from(98), 2)
}

/// Curve pathfinding adapter
///
/// Delegates route search to the on-chain router SDK, looked up per
/// chain through the injected provider. Produces at most one response:
/// the SDK's best route, or nothing when no path exists.
#[derive(Debug)]
pub struct CurveAdapter {
	sdk_provider: Arc<dyn AmmSdkProvider>,
}

impl CurveAdapter {
	pub fn new(sdk_provider: Arc<dyn AmmSdkProvider>) -> Self {
		Self { sdk_provider }
	}

	/// Resolve the input amount in token units: directly from
	/// `amountIn`, or back-solved from `amountOut` via the SDK
	async fn resolve_from_amount(
		&self,
		sdk: &Arc<dyn AmmRouterSdk>,
		query: &RoutesQuery,
		in_decimals: u8,
		out_decimals: u8,
	) -> AdapterResult<Option<Decimal>> {
		if let Some(amount_in) = query.amount_in() {
			return Ok(Some(Decimal::from_wei(amount_in, in_decimals)));
		}
		if let Some(amount_out) = query.amount_out() {
			let wanted = Decimal::from_wei(amount_out, out_decimals);
			let required = sdk
				.required_amount_in(query.token_in(), query.token_out(), &wanted)
				.await?;
			return Ok(Some(required));
		}
		Ok(None)
	}

	/// Map SDK hops into canonical route steps, recovering pool names
	///
	/// Pool lookup failures fall back to the raw pool id. That is a
	/// cosmetic degradation, logged and never escalated.
	async fn build_steps(
		&self,
		sdk: &Arc<dyn AmmRouterSdk>,
		hops: &[SdkHop],
		chain_id: u64,
	) -> Vec<RouteStep> {
		let mut steps = Vec::with_capacity(hops.len());
		for hop in hops {
			let pool_name = match sdk.pool_name(&hop.pool_id).await {
				Ok(name) => name,
				Err(e) => {
					warn!(
						pool_id = %hop.pool_id,
						error = %e,
						"pool lookup failed, falling back to raw pool id"
					);
					hop.pool_id.clone()
				},
			};

			let mut args = hop.swap_params.clone();
			args.insert("poolId".to_string(), Value::String(hop.pool_id.clone()));
			args.insert("poolName".to_string(), Value::String(pool_name));

			steps.push(
				RouteStep::swap(
					hop.token_in.clone(),
					hop.token_out.clone(),
					"curve",
					chain_id,
				)
				.with_args(args),
			);
		}
		steps
	}

	/// Warning detection for stableswap-only routes
	///
	/// Both checks are skipped entirely when any hop touches a crypto
	/// pool. The threshold is 0.98, scaled by the destination token's
	/// stored rate when that rate exceeds 1 (oracle/ERC4626-wrapped
	/// tokens). A realized rate below the threshold is a low exchange
	/// rate; a rate above it is flagged as high slippage, which
	/// marks anomalously favorable rates as suspicious.
	fn detect_warnings(
		&self,
		is_stableswap_route: bool,
		from_amount: &Decimal,
		to_amount: &Decimal,
		stored_rate: Option<&Decimal>,
	) -> Vec<RouteWarning> {
		if !is_stableswap_route || from_amount.is_zero() {
			return Vec::new();
		}

		let exchange_rate = to_amount.value() / from_amount.value();
		let threshold = match stored_rate {
			Some(rate) if rate.value() > BigDecimal::from(1) => {
				low_exchange_rate_threshold() * rate.value()
			},
			_ => low_exchange_rate_threshold(),
		};

		if exchange_rate < threshold {
			vec![RouteWarning::LowExchangeRate]
		} else if exchange_rate > threshold {
			vec![RouteWarning::HighSlippage]
		} else {
			Vec::new()
		}
	}
}

#[async_trait]
impl RouteAdapter for CurveAdapter {
	fn provider(&self) -> ProviderId {
		ProviderId::Curve
	}

	async fn fetch_routes(&self, query: &RoutesQuery) -> AdapterResult<Vec<RouteResponse>> {
		let sdk = self.sdk_provider.sdk_for_chain(query.chain_id).await?;

		let in_decimals = sdk.token_decimals(query.token_in()).await?;
		let out_decimals = sdk.token_decimals(query.token_out()).await?;

		let Some(from_amount) = self
			.resolve_from_amount(&sdk, query, in_decimals, out_decimals)
			.await?
		else {
			debug!("curve skipped: neither amountIn nor amountOut provided");
			return Ok(Vec::new());
		};

		let best = sdk
			.best_route_and_output(query.token_in(), query.token_out(), &from_amount)
			.await?;
		if best.hops.is_empty() {
			debug!(
				token_in = %query.token_in(),
				token_out = %query.token_out(),
				"curve found no route"
			);
			return Ok(Vec::new());
		}

		let price_impact = sdk
			.price_impact(query.token_in(), query.token_out(), &from_amount)
			.await?;

		let steps = self.build_steps(&sdk, &best.hops, query.chain_id).await;
		let is_stableswap_route = best.hops.iter().all(|hop| !hop.is_crypto_pool);

		// Stored rate of the destination token on the final hop shifts
		// the warning threshold for wrapped/oracle-priced tokens.
		let stored_rate = match best.hops.last() {
			Some(last) => sdk.stored_rate(&last.pool_id, query.token_out()).await?,
			None => None,
		};

		let warnings = self.detect_warnings(
			is_stableswap_route,
			&from_amount,
			&best.output,
			stored_rate.as_ref(),
		);

		let amount_in_wei = match query.amount_in() {
			Some(amount_in) => amount_in.clone(),
			None => from_amount.to_wei(in_decimals),
		};
		let amount_out_wei = best.output.to_wei(out_decimals);

		let response = RouteResponse::new(
			ProviderId::Curve,
			amount_in_wei,
			amount_out_wei,
			steps,
		)
		.with_price_impact(Some(price_impact))
		.with_stableswap_route(is_stableswap_route)
		.with_warnings(warnings);

		Ok(vec![response])
	}
}
