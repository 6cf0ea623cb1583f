//! Service startup logging

use std::env;

use tracing::info;

use crate::Settings;

/// Logs service information at startup
pub fn log_service_info(settings: &Settings) {
	info!(
		"Starting {} v{} ({})",
		settings.service.name,
		env!("CARGO_PKG_VERSION"),
		settings.service.environment.as_str()
	);
	info!("Platform: {} / {}", env::consts::OS, env::consts::ARCH);

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("Log filter: {}", rust_log);
	} else {
		info!("Log level: {}", settings.logging.level);
	}

	info!(
		"Odos endpoint: {} (per-provider timeout {}ms)",
		settings.providers.odos.base_url, settings.timeouts.per_provider_ms
	);
	info!(
		"Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion with the bound address
pub fn log_startup_complete(bind_address: &str) {
	info!("Server listening on: {}", bind_address);
	info!("Ready to accept requests");
}
