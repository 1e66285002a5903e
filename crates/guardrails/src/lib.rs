//! # Guardrails
//!
//! Runtime guardrails: evaluate a measured value against warn/abort
//! thresholds whose limits are resolved per request context by a pluggable
//! configuration provider.
//!
//! ## Example
//!
//! ```ignore
//! use guardrails::{ClientState, GuardedResource, GuardrailsService};
//! use guardrails::infrastructure::{ConfigLoader, install_config_provider};
//!
//! let config = ConfigLoader::new().load()?;
//! let provider = install_config_provider(&config.guardrails)?;
//! let service = GuardrailsService::new(provider);
//!
//! // Err(Error::GuardrailViolated { .. }) when the abort threshold is exceeded
//! service.enforce(GuardedResource::Tables, 42, "CREATE TABLE ks.t", &ClientState::for_user("alice"))?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - thresholds, configuration types, ports and errors
//! - `application` - provider registry and the guardrails service
//! - `infrastructure` - configuration loading, logging and provider bootstrap
//! - `cli` - the `guardrails` command line

/// Domain layer - core types, ports and errors
pub mod domain {
    pub use guardrails_domain::*;
}

/// Application layer - provider registry and guardrails service
pub mod application {
    pub use guardrails_application::*;
}

/// Infrastructure layer - config, logging and provider bootstrap
pub mod infrastructure {
    pub use guardrails_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::GuardrailsService;
pub use application::ports::registry::{build_config_provider, list_config_providers};
