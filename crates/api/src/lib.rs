//! Router API
//!
//! HTTP layer for the route aggregation service: query-string schema
//! validation, the routes and health handlers, and the middleware
//! stack.

pub mod handlers;
#[cfg(feature = "openapi")]
pub mod openapi;
pub mod router;
pub mod state;
pub mod validation;

pub use handlers::{ErrorBody, HealthResponse};
pub use router::create_router;
pub use state::AppState;
pub use validation::{parse_routes_query, ValidationError};
