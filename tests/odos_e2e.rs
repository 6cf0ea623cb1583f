//! Odos adapter end-to-end tests
//!
//! Runs the real adapter against a fake Odos HTTP API, through the
//! full server stack.

mod mocks;

use crate::mocks::{MockOdosUpstream, TestServer};
use reqwest::Client;
use router_aggregator::{AggregatorBuilder, Settings};
use serde_json::json;

const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
const USDT: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";
const CALLER: &str = "0xC5898606BdB494a994578453B92e7910a90aA873";
const ROUTER_CONTRACT: &str = "0xCf5540fFFCdC3d510B18bFcA6d2b9987b0772559";

fn odos_query() -> Vec<(&'static str, &'static str)> {
	vec![
		("chainId", "1"),
		("router", "odos"),
		("tokenIn", USDC),
		("tokenOut", USDT),
		("amountIn", "1000000"),
		("userAddress", CALLER),
		("slippage", "0.5"),
	]
}

async fn spawn_against(upstream: &MockOdosUpstream) -> TestServer {
	let mut settings = Settings::default();
	settings.providers.odos.base_url = upstream.base_url.clone();

	TestServer::spawn(AggregatorBuilder::new().with_settings(settings))
		.await
		.expect("failed to start test server")
}

#[tokio::test]
async fn quote_and_assemble_produce_a_route_with_a_transaction() {
	let upstream = MockOdosUpstream::spawn(
		json!({
			"inTokens": [USDC],
			"outTokens": [USDT],
			"inAmounts": ["1000000"],
			"outAmounts": ["999100"],
			"priceImpact": 0.012,
			"pathId": "abc123",
			"blockNumber": 19000000
		}),
		json!({
			"transaction": {
				"data": "0xdeadbeef",
				"to": ROUTER_CONTRACT,
				"from": CALLER,
				"value": "0"
			}
		}),
	)
	.await
	.expect("failed to start upstream");

	let server = spawn_against(&upstream).await;

	let resp = Client::new()
		.get(format!("{}/api/router/v1/routes", server.base_url))
		.query(&odos_query())
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	let payload: serde_json::Value = resp.json().await.unwrap();
	let routes = payload.as_array().unwrap();
	assert_eq!(routes.len(), 1);

	let route = &routes[0];
	assert_eq!(route["router"], "odos");
	assert_eq!(route["amountIn"][0], "1000000");
	assert_eq!(route["amountOut"][0], "999100");
	assert_eq!(route["priceImpact"], 0.012);
	assert_eq!(route["warnings"].as_array().unwrap().len(), 0);
	assert_eq!(route["isStableswapRoute"], false);
	assert_eq!(route["tx"]["data"], "0xdeadbeef");
	assert_eq!(route["tx"]["to"], ROUTER_CONTRACT);

	let steps = route["route"].as_array().unwrap();
	assert_eq!(steps.len(), 1);
	assert_eq!(steps[0]["protocol"], "odos");
	assert_eq!(steps[0]["args"]["pathId"], "abc123");

	server.abort();
	upstream.abort();
}

#[tokio::test]
async fn a_quote_without_path_id_skips_assembly() {
	let upstream = MockOdosUpstream::spawn(
		json!({
			"outAmounts": ["999100"]
		}),
		// Assemble must never be consulted; an error payload here would
		// fail the request if it were.
		json!({}),
	)
	.await
	.expect("failed to start upstream");

	let server = spawn_against(&upstream).await;

	let resp = Client::new()
		.get(format!("{}/api/router/v1/routes", server.base_url))
		.query(&odos_query())
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	let payload: serde_json::Value = resp.json().await.unwrap();
	let route = &payload.as_array().unwrap()[0];
	assert!(route.get("tx").is_none());
	// Price impact was absent upstream and defaults to null.
	assert!(route["priceImpact"].is_null());

	server.abort();
	upstream.abort();
}

#[tokio::test]
async fn upstream_failure_is_a_provider_failure_not_an_empty_result() {
	let upstream = MockOdosUpstream::spawn_failing_quote(503)
		.await
		.expect("failed to start upstream");

	let server = spawn_against(&upstream).await;

	let resp = Client::new()
		.get(format!("{}/api/router/v1/routes", server.base_url))
		.query(&odos_query())
		.send()
		.await
		.unwrap();

	// odos was the only requested provider, so its failure is total.
	assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
	let payload: serde_json::Value = resp.json().await.unwrap();
	assert!(payload["message"].as_str().unwrap().contains("503"));

	server.abort();
	upstream.abort();
}
