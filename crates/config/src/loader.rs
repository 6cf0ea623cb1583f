//! Configuration loading utilities

use std::env;

use config::{Config, ConfigError, File};

use crate::settings::EnvironmentProfile;
use crate::Settings;

/// Load configuration from the optional config file, then apply
/// environment overrides
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.build()?;

	let mut settings: Settings = s.try_deserialize()?;
	apply_env_overrides(&mut settings)?;
	Ok(settings)
}

/// Environment variables recognized by the service:
/// `PORT`, `HOST`, `NODE_ENV`, `SERVICE_NAME`, `LOG_LEVEL`,
/// `ODOS_API_URL`, `ROUTER_TIMEOUT_MS`.
fn apply_env_overrides(settings: &mut Settings) -> Result<(), ConfigError> {
	if let Ok(port) = env::var("PORT") {
		settings.server.port = port
			.parse()
			.map_err(|_| ConfigError::Message(format!("invalid PORT value: {port}")))?;
	}
	if let Ok(host) = env::var("HOST") {
		settings.server.host = host;
	}
	if let Ok(node_env) = env::var("NODE_ENV") {
		settings.service.environment = EnvironmentProfile::from_node_env(&node_env);
	}
	if let Ok(name) = env::var("SERVICE_NAME") {
		settings.service.name = name;
	}
	if let Ok(level) = env::var("LOG_LEVEL") {
		settings.logging.level = level;
	}
	if let Ok(base_url) = env::var("ODOS_API_URL") {
		settings.providers.odos.base_url = base_url;
	}
	if let Ok(timeout) = env::var("ROUTER_TIMEOUT_MS") {
		settings.timeouts.per_provider_ms = timeout.parse().map_err(|_| {
			ConfigError::Message(format!("invalid ROUTER_TIMEOUT_MS value: {timeout}"))
		})?;
	}
	Ok(())
}
