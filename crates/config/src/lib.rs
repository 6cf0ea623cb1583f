//! Router Config
//!
//! Settings structures, environment-driven loader and startup logging
//! for the route aggregation service.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::load_config;
pub use settings::{
	EnvironmentProfile, LoggingSettings, OdosSettings, ProviderSettings, ServerSettings,
	ServiceSettings, Settings, TimeoutSettings,
};
pub use startup_logger::{log_service_info, log_startup_complete};
