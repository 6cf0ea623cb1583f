use axum::{extract::State, response::Json};
use serde::Serialize;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::state::AppState;

/// Liveness response, no dependency checks
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
	pub status: String,
	pub service: String,
	pub environment: String,
	pub version: String,
	/// Seconds since process start
	pub uptime: u64,
	pub timestamp: String,
}

/// GET /health - Liveness probe
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service healthy", body = HealthResponse)),
    tag = "health"
))]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
	Json(HealthResponse {
		status: "ok".to_string(),
		service: state.service_name.clone(),
		environment: state.environment.clone(),
		version: env!("CARGO_PKG_VERSION").to_string(),
		uptime: state.started_at.elapsed().as_secs(),
		timestamp: chrono::Utc::now().to_rfc3339(),
	})
}
