//! Backend services: configuration and profile loading

mod config_service;
mod profile;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use profile::load_profile;
