//! Canonical route response model

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::primitives::{Address, Decimal};
use crate::routes::ProviderId;

/// Client-facing warnings attached to a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum RouteWarning {
	HighSlippage,
	LowExchangeRate,
}

/// One hop of a route
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
	pub token_in: Vec<Address>,
	pub token_out: Vec<Address>,
	pub protocol: String,
	/// Always `"swap"` for this service
	pub action: String,
	pub chain_id: u64,
	/// Provider-specific hop parameters, passed through untouched
	#[cfg_attr(feature = "openapi", schema(value_type = Object))]
	pub args: Map<String, Value>,
}

impl RouteStep {
	pub fn swap(
		token_in: Address,
		token_out: Address,
		protocol: impl Into<String>,
		chain_id: u64,
	) -> Self {
		Self {
			token_in: vec![token_in],
			token_out: vec![token_out],
			protocol: protocol.into(),
			action: "swap".to_string(),
			chain_id,
			args: Map::new(),
		}
	}

	pub fn with_args(mut self, args: Map<String, Value>) -> Self {
		self.args = args;
		self
	}
}

/// Submittable transaction assembled by a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RouteTx {
	pub data: String,
	pub to: Address,
	pub from: Address,
	pub value: Decimal,
}

/// Canonical result of one successful provider call
///
/// Invariant: `route` is non-empty, its first step consumes the query's
/// `tokenIn` and its last step produces the query's `tokenOut`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
	/// Unique per response instance
	pub id: String,
	pub router: ProviderId,
	/// Wei amounts, one element each
	pub amount_in: Vec<Decimal>,
	pub amount_out: Vec<Decimal>,
	pub price_impact: Option<f64>,
	/// Epoch millis at response construction
	pub created_at: i64,
	pub is_stableswap_route: bool,
	pub warnings: Vec<RouteWarning>,
	/// Present only when the provider already assembled a transaction
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tx: Option<RouteTx>,
	pub route: Vec<RouteStep>,
}

impl RouteResponse {
	/// Create a response with a fresh id and creation timestamp
	pub fn new(
		router: ProviderId,
		amount_in: Decimal,
		amount_out: Decimal,
		route: Vec<RouteStep>,
	) -> Self {
		Self {
			id: Uuid::new_v4().to_string(),
			router,
			amount_in: vec![amount_in],
			amount_out: vec![amount_out],
			price_impact: None,
			created_at: Utc::now().timestamp_millis(),
			is_stableswap_route: false,
			warnings: Vec::new(),
			tx: None,
			route,
		}
	}

	pub fn with_price_impact(mut self, price_impact: Option<f64>) -> Self {
		self.price_impact = price_impact;
		self
	}

	pub fn with_stableswap_route(mut self, is_stableswap_route: bool) -> Self {
		self.is_stableswap_route = is_stableswap_route;
		self
	}

	pub fn with_warnings(mut self, warnings: Vec<RouteWarning>) -> Self {
		self.warnings = warnings;
		self
	}

	pub fn with_tx(mut self, tx: Option<RouteTx>) -> Self {
		self.tx = tx;
		self
	}

	/// Largest output amount of this response, the ranking key
	pub fn best_amount_out(&self) -> Option<&Decimal> {
		self.amount_out.iter().max()
	}
}
