//! Test server for integration tests
//!
//! Spawns the real application router on an ephemeral port so suites
//! can drive it over HTTP.

use axum::Router;
use router_aggregator::AggregatorBuilder;
use tokio::task::JoinHandle;

pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a server assembled from the given builder
	pub async fn spawn(builder: AggregatorBuilder) -> Result<Self, Box<dyn std::error::Error>> {
		let (router, _state) = builder.start().await?;
		Self::spawn_with_app(router).await
	}

	/// Spawn a server with default settings and no custom adapters
	#[allow(dead_code)]
	pub async fn spawn_default() -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn(AggregatorBuilder::new()).await
	}

	async fn spawn_with_app(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give the server time to start accepting
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self { base_url, handle })
	}

	#[allow(dead_code)]
	pub fn abort(self) {
		self.handle.abort();
	}
}
