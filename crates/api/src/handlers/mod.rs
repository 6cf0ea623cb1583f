//! HTTP request handlers

pub mod common;
pub mod health;
pub mod routes;

pub use common::ErrorBody;
pub use health::{health, HealthResponse};
pub use routes::get_routes;
