//! Fake Odos HTTP API for adapter integration tests
//!
//! Serves canned `/quote` and `/assemble` payloads, or a fixed error
//! status, on an ephemeral port.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde_json::Value;
use tokio::task::JoinHandle;

#[derive(Clone)]
struct UpstreamState {
	quote: Result<Value, u16>,
	assemble: Result<Value, u16>,
}

pub struct MockOdosUpstream {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl MockOdosUpstream {
	/// Serve the given payloads on /quote and /assemble
	pub async fn spawn(
		quote: Value,
		assemble: Value,
	) -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with(UpstreamState {
			quote: Ok(quote),
			assemble: Ok(assemble),
		})
		.await
	}

	/// Fail /quote with the given HTTP status
	#[allow(dead_code)]
	pub async fn spawn_failing_quote(status: u16) -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with(UpstreamState {
			quote: Err(status),
			assemble: Err(status),
		})
		.await
	}

	async fn spawn_with(state: UpstreamState) -> Result<Self, Box<dyn std::error::Error>> {
		let app = Router::new()
			.route("/quote", get(quote_handler))
			.route("/assemble", get(assemble_handler))
			.with_state(state);

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self { base_url, handle })
	}

	#[allow(dead_code)]
	pub fn abort(self) {
		self.handle.abort();
	}
}

async fn quote_handler(State(state): State<UpstreamState>) -> Result<Json<Value>, StatusCode> {
	match state.quote {
		Ok(value) => Ok(Json(value)),
		Err(status) => Err(StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)),
	}
}

async fn assemble_handler(State(state): State<UpstreamState>) -> Result<Json<Value>, StatusCode> {
	match state.assemble {
		Ok(value) => Ok(Json(value)),
		Err(status) => Err(StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)),
	}
}
