//! Odos adapter: two-step quote + assemble HTTP flow

use async_trait::async_trait;
use reqwest::Response;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, error};

use router_types::{
	AdapterError, AdapterResult, Address, Decimal, ProviderId, RouteAdapter, RouteResponse,
	RouteStep, RouteTx, RoutesQuery,
};

use crate::client_cache::{ClientCache, ClientConfig};

/// Odos pathfinding adapter
///
/// Quotes require both an input amount and a caller address; without
/// them the adapter reports no routes rather than an error. A priced
/// path comes back from `/quote` with a `pathId`, which `/assemble`
/// turns into a submittable transaction.
#[derive(Debug)]
pub struct OdosAdapter {
	base_url: String,
	clients: ClientCache,
}

impl OdosAdapter {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self::with_cache(base_url, ClientCache::for_adapter())
	}

	/// Use a dedicated client cache, for tests or custom pooling
	pub fn with_cache(base_url: impl Into<String>, clients: ClientCache) -> Self {
		Self {
			base_url: trim_trailing_slash(base_url.into()),
			clients,
		}
	}

	fn client_config(&self) -> ClientConfig {
		ClientConfig::new(ProviderId::Odos, self.base_url.clone())
	}

	async fn fetch_quote(
		&self,
		query: &RoutesQuery,
		amount_in: &Decimal,
		user_address: &Address,
	) -> AdapterResult<OdosQuote> {
		let client = self.clients.get_client(&self.client_config())?;
		let url = format!("{}/quote", self.base_url);
		let chain_id = query.chain_id.to_string();
		let slippage = query.slippage.unwrap_or(0.0).to_string();

		let mut params = vec![
			("chain_id", chain_id.as_str()),
			("from_address", query.token_in().as_str()),
			("to_address", query.token_out().as_str()),
			("amount", amount_in.as_str()),
			("slippage", slippage.as_str()),
			("caller_address", user_address.as_str()),
		];
		params.push(("pathVizImage", "false"));

		let response = client.get(&url).query(&params).send().await?;
		self.ensure_ok(response, &url, query).await?.json().await.map_err(AdapterError::Http)
	}

	async fn assemble(
		&self,
		query: &RoutesQuery,
		path_id: &str,
		user_address: &Address,
	) -> AdapterResult<Option<RouteTx>> {
		let client = self.clients.get_client(&self.client_config())?;
		let url = format!("{}/assemble", self.base_url);
		let params = [("pathId", path_id), ("userAddr", user_address.as_str())];

		let response = client.get(&url).query(&params).send().await?;
		let assembled: OdosAssembled = self.ensure_ok(response, &url, query).await?.json().await?;

		let Some(tx) = assembled.transaction else {
			return Ok(None);
		};

		let to = Address::new(tx.to.as_str()).map_err(|e| self.invalid(format!("tx.to: {e}")))?;
		let from =
			Address::new(tx.from.as_str()).map_err(|e| self.invalid(format!("tx.from: {e}")))?;
		let value = Decimal::new(json_amount(&tx.value))
			.map_err(|e| self.invalid(format!("tx.value: {e}")))?;

		Ok(Some(RouteTx {
			data: tx.data,
			to,
			from,
			value,
		}))
	}

	/// Non-OK statuses mean the quote request itself was malformed or
	/// the service failed, which is distinct from "no route exists":
	/// they escalate as a per-provider failure.
	async fn ensure_ok(
		&self,
		response: Response,
		url: &str,
		query: &RoutesQuery,
	) -> AdapterResult<Response> {
		let status = response.status();
		if status.is_success() {
			return Ok(response);
		}

		let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();
		error!(
			status = status.as_u16(),
			status_text = %status_text,
			url = %url,
			query = %serde_json::to_string(query).unwrap_or_default(),
			"odos request failed"
		);
		Err(AdapterError::HttpStatus {
			status: status.as_u16(),
			status_text,
			url: url.to_string(),
		})
	}

	fn invalid(&self, reason: String) -> AdapterError {
		AdapterError::InvalidResponse {
			provider: ProviderId::Odos,
			reason,
		}
	}
}

#[async_trait]
impl RouteAdapter for OdosAdapter {
	fn provider(&self) -> ProviderId {
		ProviderId::Odos
	}

	async fn fetch_routes(&self, query: &RoutesQuery) -> AdapterResult<Vec<RouteResponse>> {
		// Odos cannot quote from amountOut and needs a caller address
		// to generate the transaction. Not an error: no routes.
		let (Some(amount_in), Some(user_address)) = (query.amount_in(), query.user_address.as_ref())
		else {
			debug!("odos skipped: amountIn and userAddress are required");
			return Ok(Vec::new());
		};

		let quote = self.fetch_quote(query, amount_in, user_address).await?;

		let out_amount = quote
			.out_amounts
			.first()
			.ok_or_else(|| self.invalid("quote returned no output amounts".to_string()))?;
		let out_amount = Decimal::new(out_amount.as_str())
			.map_err(|e| self.invalid(format!("outAmounts[0]: {e}")))?;

		// Assembly is skipped, not failed, when the quote carries no path id.
		let tx = match quote.path_id.as_deref().filter(|p| !p.is_empty()) {
			Some(path_id) => self.assemble(query, path_id, user_address).await?,
			None => None,
		};

		let mut args = Map::new();
		if let Some(path_id) = &quote.path_id {
			args.insert("pathId".to_string(), Value::String(path_id.clone()));
		}
		if let Some(path_viz) = quote.path_viz {
			args.insert("pathViz".to_string(), path_viz);
		}
		if let Some(block_number) = quote.block_number {
			args.insert("blockNumber".to_string(), Value::from(block_number));
		}

		let step = RouteStep::swap(
			query.token_in().clone(),
			query.token_out().clone(),
			"odos",
			query.chain_id,
		)
		.with_args(args);

		// Odos does not expose slippage or pool classification, so the
		// response never carries warnings and never marks stableswap.
		let response = RouteResponse::new(ProviderId::Odos, amount_in.clone(), out_amount, vec![step])
			.with_price_impact(quote.price_impact)
			.with_tx(tx);

		Ok(vec![response])
	}
}

fn trim_trailing_slash(mut url: String) -> String {
	while url.ends_with('/') {
		url.pop();
	}
	url
}

fn json_amount(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// Quote response subset consumed by this service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OdosQuote {
	#[serde(default)]
	out_amounts: Vec<String>,
	#[serde(default)]
	price_impact: Option<f64>,
	#[serde(default)]
	path_id: Option<String>,
	#[serde(default)]
	path_viz: Option<Value>,
	#[serde(default)]
	block_number: Option<u64>,
}

/// Assemble response subset
#[derive(Debug, Deserialize)]
struct OdosAssembled {
	#[serde(default)]
	transaction: Option<OdosTransaction>,
}

#[derive(Debug, Deserialize)]
struct OdosTransaction {
	data: String,
	to: String,
	from: String,
	#[serde(default)]
	value: Value,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn usdc() -> Address {
		Address::new("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48").unwrap()
	}

	fn usdt() -> Address {
		Address::new("0xdAC17F958D2ee523a2206206994597C13D831ec7").unwrap()
	}

	#[tokio::test]
	async fn missing_amount_in_yields_no_routes_without_a_network_call() {
		// base_url is unroutable on purpose: the guard must fire first.
		let adapter = OdosAdapter::new("http://127.0.0.1:1/odos");
		let query = RoutesQuery::new(usdc(), usdt())
			.with_user_address(Address::new("0xC5898606BdB494a994578453B92e7910a90aA873").unwrap());
		let routes = adapter.fetch_routes(&query).await.unwrap();
		assert!(routes.is_empty());
	}

	#[tokio::test]
	async fn missing_user_address_yields_no_routes() {
		let adapter = OdosAdapter::new("http://127.0.0.1:1/odos");
		let query =
			RoutesQuery::new(usdc(), usdt()).with_amount_in(Decimal::new("1000").unwrap());
		let routes = adapter.fetch_routes(&query).await.unwrap();
		assert!(routes.is_empty());
	}

	#[test]
	fn quote_deserializes_with_absent_optionals() {
		let quote: OdosQuote = serde_json::from_str(
			r#"{"inTokens": [], "outTokens": [], "inAmounts": ["1000"], "outAmounts": ["998"],
			    "gasEstimate": 180000, "blockNumber": 19000000}"#,
		)
		.unwrap();
		assert_eq!(quote.out_amounts, vec!["998".to_string()]);
		assert_eq!(quote.price_impact, None);
		assert_eq!(quote.path_id, None);
		assert_eq!(quote.block_number, Some(19000000));
	}

	#[test]
	fn assembled_transaction_value_accepts_number_or_string() {
		let assembled: OdosAssembled = serde_json::from_str(
			r#"{"transaction": {"data": "0xab", "to": "0x1", "from": "0x2", "value": 0}}"#,
		)
		.unwrap();
		let tx = assembled.transaction.unwrap();
		assert_eq!(json_amount(&tx.value), "0");

		let assembled: OdosAssembled = serde_json::from_str(
			r#"{"transaction": {"data": "0xab", "to": "0x1", "from": "0x2", "value": "12"}}"#,
		)
		.unwrap();
		assert_eq!(json_amount(&assembled.transaction.unwrap().value), "12");
	}

	#[test]
	fn base_url_trailing_slash_is_normalized() {
		let adapter = OdosAdapter::new("https://prices.curve.finance/odos/");
		assert_eq!(adapter.base_url, "https://prices.curve.finance/odos");
	}
}
