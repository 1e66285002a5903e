//! # Guardrails Infrastructure
//!
//! Cross-cutting technical concerns for guardrails:
//!
//! - [`config`] - figment-based configuration loading (TOML + environment)
//! - [`logging`] - structured logging with tracing
//! - [`bootstrap`] - process-wide installation of the configuration provider
//! - [`error_ext`] - context helpers mapping foreign errors into domain errors

// Force linkme registration of the built-in configuration providers
extern crate guardrails_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{config_provider, guardrails_service, install_config_provider};
pub use config::{AppConfig, ConfigLoader, GuardrailsSettings, LoggingConfig};
