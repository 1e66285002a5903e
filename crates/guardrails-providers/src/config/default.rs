//! Default guardrails configuration provider
//!
//! Serves the process-wide configuration loaded at startup to every
//! request context.

use std::sync::Arc;

use guardrails_application::ports::registry::{
    GUARDRAILS_CONFIG_PROVIDERS, GuardrailsConfigProviderEntry,
};
use guardrails_domain::constants::DEFAULT_CONFIG_PROVIDER;
use guardrails_domain::ports::GuardrailsConfigProvider;
use guardrails_domain::value_objects::{ClientState, GuardrailsConfig};

/// Provider returning the same configuration for every context
///
/// Limits are validated when the [`GuardrailsConfig`] is built, so the
/// provider serves them as given.
#[derive(Debug, Clone)]
pub struct DefaultConfigProvider {
    config: Arc<GuardrailsConfig>,
}

impl DefaultConfigProvider {
    /// Create a provider serving `config`
    pub fn new(config: GuardrailsConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl GuardrailsConfigProvider for DefaultConfigProvider {
    fn get_or_create(&self, _state: &ClientState) -> Arc<GuardrailsConfig> {
        Arc::clone(&self.config)
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(GUARDRAILS_CONFIG_PROVIDERS)]
static DEFAULT_PROVIDER: GuardrailsConfigProviderEntry = GuardrailsConfigProviderEntry {
    name: DEFAULT_CONFIG_PROVIDER,
    description: "Process-wide guardrail limits from the loaded configuration",
    factory: |defaults: &GuardrailsConfig| Ok(Arc::new(DefaultConfigProvider::new(defaults.clone()))),
};
