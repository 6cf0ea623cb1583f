//! Router Service
//!
//! Core logic for route aggregation: concurrent provider fan-out,
//! per-provider deadlines and deterministic ranking.

pub mod aggregator;
pub mod timeout;

pub use aggregator::{AggregatorResult, AggregatorService, AggregatorServiceError};
pub use timeout::with_timeout;
