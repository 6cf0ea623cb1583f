//! Declarative query-string validation for the routes endpoint
//!
//! Every request is validated here before the aggregator is invoked;
//! the aggregator never sees malformed input. Violation messages keep
//! the schema-validator grammar clients already parse
//! (`querystring/tokenIn/0 must match pattern "..."`), surfaced as
//! `FST_ERR_VALIDATION` payloads by the handler.

use std::str::FromStr;

use thiserror::Error;
use url::form_urlencoded;

use router_types::{Address, Decimal, ProviderId, RoutesQuery, ADDRESS_HEX_PATTERN, WEI_PATTERN};

/// A schema violation, carrying the client-facing message
#[derive(Error, Debug, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
	pub message: String,
}

impl ValidationError {
	fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	fn required(property: &str) -> Self {
		Self::new(format!(
			"querystring must have required property '{property}'"
		))
	}

	fn must_be(path: &str, expected: &str) -> Self {
		Self::new(format!("querystring/{path} must be {expected}"))
	}

	fn min(path: &str, minimum: impl std::fmt::Display) -> Self {
		Self::new(format!("querystring/{path} must be >= {minimum}"))
	}

	fn max_items(path: &str, maximum: usize) -> Self {
		Self::new(format!(
			"querystring/{path} must NOT have more than {maximum} items"
		))
	}

	fn pattern(path: &str, pattern: &str) -> Self {
		Self::new(format!(
			"querystring/{path} must match pattern \"{pattern}\""
		))
	}

	fn enumeration(path: &str) -> Self {
		Self::new(format!(
			"querystring/{path} must be equal to one of the allowed values"
		))
	}

	fn duplicates(path: &str, later: usize, earlier: usize) -> Self {
		Self::new(format!(
			"querystring/{path} must NOT have duplicate items (items ## {later} and {earlier} are identical)"
		))
	}
}

/// Parse and validate the raw query string into a canonical query
///
/// Fields are validated in schema declaration order: `chainId`,
/// `router`, `tokenIn`, `tokenOut`, `amountIn`, `amountOut`,
/// `userAddress`, `slippage`. The first violation short-circuits.
pub fn parse_routes_query(raw: &str) -> Result<RoutesQuery, ValidationError> {
	let pairs: Vec<(String, String)> = form_urlencoded::parse(raw.as_bytes())
		.into_owned()
		.collect();
	let values = |key: &str| -> Vec<&str> {
		pairs
			.iter()
			.filter(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
			.collect()
	};

	let chain_id = parse_chain_id(&values("chainId"))?;
	let routers = parse_routers(&values("router"))?;
	let token_in = parse_token(&values("tokenIn"), "tokenIn")?;
	let token_out = parse_token(&values("tokenOut"), "tokenOut")?;
	let amount_in = parse_amount(&values("amountIn"), "amountIn")?;
	let amount_out = parse_amount(&values("amountOut"), "amountOut")?;
	let user_address = parse_user_address(&values("userAddress"))?;
	let slippage = parse_slippage(&values("slippage"))?;

	Ok(RoutesQuery {
		chain_id,
		routers,
		token_in: vec![token_in],
		token_out: vec![token_out],
		amount_in,
		amount_out,
		user_address,
		slippage,
	})
}

fn parse_chain_id(values: &[&str]) -> Result<u64, ValidationError> {
	match values {
		[] => Ok(1),
		[value] => {
			let chain_id: u64 = value
				.parse()
				.map_err(|_| ValidationError::must_be("chainId", "integer"))?;
			if chain_id < 1 {
				return Err(ValidationError::min("chainId", 1));
			}
			Ok(chain_id)
		},
		_ => Err(ValidationError::must_be("chainId", "integer")),
	}
}

fn parse_routers(values: &[&str]) -> Result<Vec<ProviderId>, ValidationError> {
	if values.is_empty() {
		return Ok(vec![ProviderId::Curve]);
	}
	if values.len() > ProviderId::all().len() {
		return Err(ValidationError::max_items("router", ProviderId::all().len()));
	}

	let mut routers = Vec::with_capacity(values.len());
	for (index, value) in values.iter().enumerate() {
		let provider = ProviderId::from_str(value)
			.map_err(|_| ValidationError::enumeration(&format!("router/{index}")))?;
		if let Some(earlier) = routers.iter().position(|r| *r == provider) {
			return Err(ValidationError::duplicates("router", index, earlier));
		}
		routers.push(provider);
	}
	Ok(routers)
}

fn parse_token(values: &[&str], property: &str) -> Result<Address, ValidationError> {
	match values {
		[] => Err(ValidationError::required(property)),
		[value] => Address::new(*value).map_err(|_| {
			ValidationError::pattern(&format!("{property}/0"), ADDRESS_HEX_PATTERN)
		}),
		_ => Err(ValidationError::max_items(property, 1)),
	}
}

fn parse_amount(values: &[&str], property: &str) -> Result<Vec<Decimal>, ValidationError> {
	match values {
		[] => Ok(Vec::new()),
		[value] => {
			// Only unsigned wei integers are accepted at the boundary,
			// stricter than the internal decimal type.
			let is_wei = !value.is_empty() && value.chars().all(|c| c.is_ascii_digit());
			if !is_wei {
				return Err(ValidationError::pattern(
					&format!("{property}/0"),
					WEI_PATTERN,
				));
			}
			let amount = Decimal::new(*value).map_err(|_| {
				ValidationError::pattern(&format!("{property}/0"), WEI_PATTERN)
			})?;
			Ok(vec![amount])
		},
		_ => Err(ValidationError::max_items(property, 1)),
	}
}

fn parse_user_address(values: &[&str]) -> Result<Option<Address>, ValidationError> {
	match values {
		[] => Ok(None),
		[value] => Address::new(*value)
			.map(Some)
			.map_err(|_| ValidationError::pattern("userAddress", ADDRESS_HEX_PATTERN)),
		_ => Err(ValidationError::must_be("userAddress", "string")),
	}
}

fn parse_slippage(values: &[&str]) -> Result<Option<f64>, ValidationError> {
	match values {
		[] => Ok(None),
		[value] => {
			let slippage: f64 = value
				.parse()
				.map_err(|_| ValidationError::must_be("slippage", "number"))?;
			if !slippage.is_finite() {
				return Err(ValidationError::must_be("slippage", "number"));
			}
			if slippage < 0.0 {
				return Err(ValidationError::min("slippage", 0));
			}
			Ok(Some(slippage))
		},
		_ => Err(ValidationError::must_be("slippage", "number")),
	}
}
