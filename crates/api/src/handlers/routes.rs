use axum::{
	extract::{RawQuery, State},
	http::StatusCode,
	response::Json,
};
use tracing::info;

use crate::handlers::common::ErrorBody;
use crate::state::AppState;
use crate::validation::parse_routes_query;
use router_types::RouteResponse;

/// GET /api/router/v1/routes - Query routes across providers
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/router/v1/routes",
    params(
        ("chainId" = Option<u64>, Query, description = "Chain id, defaults to 1"),
        ("router" = Option<Vec<String>>, Query, description = "Provider subset, defaults to [curve]"),
        ("tokenIn" = String, Query, description = "Input token address"),
        ("tokenOut" = String, Query, description = "Output token address"),
        ("amountIn" = Option<String>, Query, description = "Input amount in wei"),
        ("amountOut" = Option<String>, Query, description = "Output amount in wei"),
        ("userAddress" = Option<String>, Query, description = "Caller address"),
        ("slippage" = Option<f64>, Query, description = "Slippage tolerance"),
    ),
    responses(
        (status = 200, description = "Ranked routes, possibly empty", body = Vec<RouteResponse>),
        (status = 400, description = "Schema violation", body = ErrorBody),
        (status = 500, description = "All requested providers failed", body = ErrorBody)
    ),
    tag = "routes"
))]
pub async fn get_routes(
	State(state): State<AppState>,
	RawQuery(raw): RawQuery,
) -> Result<Json<Vec<RouteResponse>>, (StatusCode, Json<ErrorBody>)> {
	// Schema violations short-circuit before any provider is invoked.
	let query = parse_routes_query(raw.as_deref().unwrap_or("")).map_err(|e| {
		(StatusCode::BAD_REQUEST, Json(ErrorBody::validation(e)))
	})?;

	info!(
		chain_id = query.chain_id,
		token_in = %query.token_in(),
		token_out = %query.token_out(),
		"received routes request"
	);

	let routes = state.aggregator.get_routes(&query).await.map_err(|e| {
		(
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(ErrorBody::internal(e.to_string())),
		)
	})?;

	Ok(Json(routes))
}
