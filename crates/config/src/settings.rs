//! Configuration settings structures

use serde::{Deserialize, Serialize};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub service: ServiceSettings,
	pub providers: ProviderSettings,
	pub timeouts: TimeoutSettings,
	pub logging: LoggingSettings,
}

/// Server bind configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 3010,
		}
	}
}

impl ServerSettings {
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}
}

/// Service identity, reported by the health endpoint
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServiceSettings {
	pub name: String,
	pub environment: EnvironmentProfile,
}

impl Default for ServiceSettings {
	fn default() -> Self {
		Self {
			name: "router-api".to_string(),
			environment: EnvironmentProfile::Development,
		}
	}
}

/// Environment profiles
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentProfile {
	Development,
	Staging,
	Production,
}

impl EnvironmentProfile {
	/// Map a NODE_ENV-style string onto a profile
	pub fn from_node_env(value: &str) -> Self {
		match value {
			"production" => Self::Production,
			"staging" => Self::Staging,
			_ => Self::Development,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Development => "development",
			Self::Staging => "staging",
			Self::Production => "production",
		}
	}
}

/// Per-provider endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ProviderSettings {
	pub odos: OdosSettings,
}

/// Odos aggregator endpoint
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OdosSettings {
	pub base_url: String,
}

impl Default for OdosSettings {
	fn default() -> Self {
		Self {
			base_url: "https://prices.curve.finance/odos".to_string(),
		}
	}
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Budget each provider gets before its call is detached
	pub per_provider_ms: u64,
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self {
			per_provider_ms: 30_000,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
		}
	}
}
