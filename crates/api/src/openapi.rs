//! OpenAPI documentation, available behind the `openapi` feature

use utoipa::OpenApi;

use crate::handlers;
use router_types::{ProviderId, RouteResponse, RouteStep, RouteTx, RouteWarning};

#[derive(OpenApi)]
#[openapi(
	paths(handlers::routes::get_routes, handlers::health::health),
	components(schemas(
		ProviderId,
		RouteResponse,
		RouteStep,
		RouteTx,
		RouteWarning,
		handlers::common::ErrorBody,
		handlers::health::HealthResponse,
	)),
	tags(
		(name = "routes", description = "Multi-provider route queries"),
		(name = "health", description = "Liveness probe")
	),
	info(
		title = "router-api",
		description = "Multi-provider swap route aggregation service",
	)
)]
pub struct ApiDoc;
