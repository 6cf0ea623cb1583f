//! Router Types
//!
//! Shared models and traits for the route aggregation service:
//! amount/address primitives, the canonical query and response shapes,
//! the provider adapter contract, and the on-chain SDK collaborator
//! interface.

pub mod adapters;
pub mod primitives;
pub mod routes;
pub mod sdk;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

pub use primitives::{Address, AddressError, Decimal, DecimalError, ADDRESS_HEX_PATTERN, WEI_PATTERN};

pub use routes::{
	ProviderId, RouteResponse, RouteStep, RouteTx, RouteWarning, RoutesQuery, UnknownProviderError,
};

pub use adapters::{AdapterError, AdapterResult, RouteAdapter};

pub use sdk::{AmmRouterSdk, AmmSdkProvider, SdkBestRoute, SdkError, SdkHop, SdkResult};
