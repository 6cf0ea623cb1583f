//! Routes endpoint end-to-end tests
//!
//! Drives GET /api/router/v1/routes over HTTP against servers wired
//! with mock adapters and a mock on-chain SDK.

mod mocks;

use crate::mocks::TestServer;
use reqwest::Client;
use router_aggregator::mocks::{sample_response, usdc, usdt, MockAmmSdk, MockRouteAdapter};
use router_aggregator::{AggregatorBuilder, ProviderId};

const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
const USDT: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";

fn routes_url(server: &TestServer) -> String {
	format!("{}/api/router/v1/routes", server.base_url)
}

fn is_decimal_amount(value: &str) -> bool {
	// ^[0-9]+\.?[0-9]*$
	let mut chars = value.chars().peekable();
	let mut leading = 0usize;
	while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
		chars.next();
		leading += 1;
	}
	if leading == 0 {
		return false;
	}
	match chars.next() {
		None => true,
		Some('.') => chars.all(|c| c.is_ascii_digit()),
		Some(_) => false,
	}
}

#[tokio::test]
async fn curve_quote_by_amount_in_returns_one_ranked_route() {
	let server = TestServer::spawn(
		AggregatorBuilder::new()
			.with_sdk_provider(MockAmmSdk::stable_pair("0.9995").into_provider()),
	)
	.await
	.expect("failed to start test server");

	let resp = Client::new()
		.get(routes_url(&server))
		.query(&[
			("chainId", "1"),
			("tokenIn", USDC),
			("tokenOut", USDT),
			("amountIn", "1000000"),
		])
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	let payload: serde_json::Value = resp.json().await.unwrap();
	let routes = payload.as_array().unwrap();
	assert_eq!(routes.len(), 1);

	let route = &routes[0];
	assert!(!route["id"].as_str().unwrap().is_empty());
	assert_eq!(route["router"], "curve");
	assert!(is_decimal_amount(route["amountOut"][0].as_str().unwrap()));
	assert_eq!(route["amountOut"][0], "999500");
	assert!(route["createdAt"].is_number());
	assert!(route["priceImpact"].is_number());

	let steps = route["route"].as_array().unwrap();
	assert!(!steps.is_empty());
	for step in steps {
		assert_eq!(step["protocol"], "curve");
		assert_eq!(step["action"], "swap");
	}

	// The route's endpoints match the query's tokens.
	let first = &steps[0];
	let last = &steps[steps.len() - 1];
	assert_eq!(
		first["tokenIn"][0].as_str().unwrap().to_lowercase(),
		USDC.to_lowercase()
	);
	assert_eq!(
		last["tokenOut"][0].as_str().unwrap().to_lowercase(),
		USDT.to_lowercase()
	);

	server.abort();
}

#[tokio::test]
async fn odos_without_amount_in_is_an_empty_success() {
	let server = TestServer::spawn_default()
		.await
		.expect("failed to start test server");

	let resp = Client::new()
		.get(routes_url(&server))
		.query(&[
			("chainId", "1"),
			("router", "odos"),
			("tokenIn", USDC),
			("tokenOut", USDT),
		])
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::OK);
	let payload: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(payload.as_array().unwrap().len(), 0);

	server.abort();
}

#[tokio::test]
async fn partial_provider_failure_still_returns_the_survivors() {
	let server = TestServer::spawn(
		AggregatorBuilder::new()
			.with_sdk_provider(MockAmmSdk::stable_pair("0.9995").into_provider())
			.with_adapter(Box::new(MockRouteAdapter::failing(
				ProviderId::Odos,
				"upstream unavailable",
			))),
	)
	.await
	.expect("failed to start test server");

	let resp = Client::new()
		.get(routes_url(&server))
		.query(&[
			("chainId", "1"),
			("router", "curve"),
			("router", "odos"),
			("tokenIn", USDC),
			("tokenOut", USDT),
			("amountIn", "1000000"),
		])
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::OK);
	let payload: serde_json::Value = resp.json().await.unwrap();
	let routes = payload.as_array().unwrap();
	assert_eq!(routes.len(), 1);
	assert_eq!(routes[0]["router"], "curve");

	server.abort();
}

#[tokio::test]
async fn responses_are_ranked_across_providers() {
	let server = TestServer::spawn(
		AggregatorBuilder::new()
			.with_adapter(Box::new(MockRouteAdapter::returning(
				ProviderId::Curve,
				vec![sample_response(ProviderId::Curve, "999500")],
			)))
			.with_adapter(Box::new(MockRouteAdapter::returning(
				ProviderId::Odos,
				vec![sample_response(ProviderId::Odos, "1000200")],
			))),
	)
	.await
	.expect("failed to start test server");

	let resp = Client::new()
		.get(routes_url(&server))
		.query(&[
			("chainId", "1"),
			("router", "curve"),
			("router", "odos"),
			("tokenIn", USDC),
			("tokenOut", USDT),
			("amountIn", "1000000"),
		])
		.send()
		.await
		.unwrap();

	let payload: serde_json::Value = resp.json().await.unwrap();
	let routes = payload.as_array().unwrap();
	assert_eq!(routes.len(), 2);
	assert_eq!(routes[0]["router"], "odos");
	assert_eq!(routes[1]["router"], "curve");

	server.abort();
}

#[tokio::test]
async fn unbound_curve_sdk_surfaces_as_a_server_error() {
	// No SDK provider: curve is unregistered and the only requested
	// provider, so the aggregate failure propagates as a 500.
	let server = TestServer::spawn_default()
		.await
		.expect("failed to start test server");

	let resp = Client::new()
		.get(routes_url(&server))
		.query(&[
			("chainId", "1"),
			("tokenIn", USDC),
			("tokenOut", USDT),
			("amountIn", "1000000"),
		])
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
	let payload: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(payload["statusCode"], 500);
	assert_eq!(payload["error"], "Internal Server Error");
	assert!(payload["message"]
		.as_str()
		.unwrap()
		.contains("no adapter registered for provider: curve"));

	server.abort();
}

#[tokio::test]
async fn trailing_slash_is_tolerated() {
	let server = TestServer::spawn(
		AggregatorBuilder::new()
			.with_sdk_provider(MockAmmSdk::stable_pair("0.9995").into_provider()),
	)
	.await
	.expect("failed to start test server");

	let resp = Client::new()
		.get(format!("{}/", routes_url(&server)))
		.query(&[
			("chainId", "1"),
			("tokenIn", USDC),
			("tokenOut", USDT),
			("amountIn", "1000000"),
		])
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	server.abort();
}

#[tokio::test]
async fn stableswap_warning_appears_on_the_wire() {
	// 0.97 output on a stableswap pair sits below the 0.98 threshold.
	let server = TestServer::spawn(
		AggregatorBuilder::new()
			.with_sdk_provider(MockAmmSdk::stable_pair("0.97").into_provider()),
	)
	.await
	.expect("failed to start test server");

	let resp = Client::new()
		.get(routes_url(&server))
		.query(&[
			("chainId", "1"),
			("tokenIn", USDC),
			("tokenOut", USDT),
			("amountIn", "1000000"),
		])
		.send()
		.await
		.unwrap();

	let payload: serde_json::Value = resp.json().await.unwrap();
	let route = &payload.as_array().unwrap()[0];
	assert_eq!(route["isStableswapRoute"], true);
	assert_eq!(route["warnings"][0], "low-exchange-rate");

	server.abort();
}

#[test]
fn decimal_amount_shape_helper_matches_the_expected_grammar() {
	assert!(is_decimal_amount("999500"));
	assert!(is_decimal_amount("999500.5"));
	assert!(is_decimal_amount("999500."));
	assert!(!is_decimal_amount(""));
	assert!(!is_decimal_amount(".5"));
	assert!(!is_decimal_amount("-10"));
	assert!(!is_decimal_amount("1e5"));
}

// Fixtures referenced by name to keep the mock crate honest.
#[test]
fn fixture_addresses_match_the_constants() {
	assert_eq!(usdc().as_str(), USDC);
	assert_eq!(usdt().as_str(), USDT);
}
