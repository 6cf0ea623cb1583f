//! Canonical route query model

use serde::Serialize;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::primitives::{Address, Decimal};
use crate::routes::ProviderId;

/// Canonical swap-route request, produced by the HTTP schema layer
///
/// The single-element vectors mirror the wire shape: `tokenIn`,
/// `tokenOut`, `amountIn` and `amountOut` arrive as query-string arrays
/// of exactly one item. The schema layer enforces the shapes before a
/// query is constructed, so accessors here can assume them.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RoutesQuery {
	pub chain_id: u64,
	/// Requested provider subset, defaulted to `[curve]` by the schema
	#[serde(rename = "router")]
	pub routers: Vec<ProviderId>,
	pub token_in: Vec<Address>,
	pub token_out: Vec<Address>,
	/// Wei-denominated integer string, at most one element
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub amount_in: Vec<Decimal>,
	/// Wei-denominated integer string, at most one element
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub amount_out: Vec<Decimal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_address: Option<Address>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub slippage: Option<f64>,
}

impl RoutesQuery {
	/// Minimal query on mainnet with the default provider set
	pub fn new(token_in: Address, token_out: Address) -> Self {
		Self {
			chain_id: 1,
			routers: vec![ProviderId::Curve],
			token_in: vec![token_in],
			token_out: vec![token_out],
			amount_in: Vec::new(),
			amount_out: Vec::new(),
			user_address: None,
			slippage: None,
		}
	}

	pub fn with_chain_id(mut self, chain_id: u64) -> Self {
		self.chain_id = chain_id;
		self
	}

	pub fn with_routers(mut self, routers: Vec<ProviderId>) -> Self {
		self.routers = routers;
		self
	}

	pub fn with_amount_in(mut self, amount_in: Decimal) -> Self {
		self.amount_in = vec![amount_in];
		self
	}

	pub fn with_amount_out(mut self, amount_out: Decimal) -> Self {
		self.amount_out = vec![amount_out];
		self
	}

	pub fn with_user_address(mut self, user_address: Address) -> Self {
		self.user_address = Some(user_address);
		self
	}

	pub fn with_slippage(mut self, slippage: f64) -> Self {
		self.slippage = Some(slippage);
		self
	}

	pub fn token_in(&self) -> &Address {
		&self.token_in[0]
	}

	pub fn token_out(&self) -> &Address {
		&self.token_out[0]
	}

	pub fn amount_in(&self) -> Option<&Decimal> {
		self.amount_in.first()
	}

	pub fn amount_out(&self) -> Option<&Decimal> {
		self.amount_out.first()
	}
}
