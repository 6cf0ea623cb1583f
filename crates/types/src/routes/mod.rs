//! Core route domain model: providers, queries, responses

use serde::{Deserialize, Serialize};
use thiserror::Error;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub mod request;
pub mod response;

pub use request::RoutesQuery;
pub use response::{RouteResponse, RouteStep, RouteTx, RouteWarning};

/// Identity of a pathfinding backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
	Curve,
	Enso,
	Odos,
}

/// Error for unrecognized provider names at parse time
#[derive(Error, Debug, PartialEq)]
#[error("unknown route provider: {value}")]
pub struct UnknownProviderError {
	pub value: String,
}

impl ProviderId {
	/// All known providers, in schema declaration order
	pub fn all() -> &'static [ProviderId] {
		&[ProviderId::Curve, ProviderId::Enso, ProviderId::Odos]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			ProviderId::Curve => "curve",
			ProviderId::Enso => "enso",
			ProviderId::Odos => "odos",
		}
	}
}

impl std::fmt::Display for ProviderId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl std::str::FromStr for ProviderId {
	type Err = UnknownProviderError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"curve" => Ok(ProviderId::Curve),
			"enso" => Ok(ProviderId::Enso),
			"odos" => Ok(ProviderId::Odos),
			other => Err(UnknownProviderError {
				value: other.to_string(),
			}),
		}
	}
}
