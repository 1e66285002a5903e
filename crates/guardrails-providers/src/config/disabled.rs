//! Provider with every guardrail disabled

use std::sync::Arc;

use guardrails_application::ports::registry::{
    GUARDRAILS_CONFIG_PROVIDERS, GuardrailsConfigProviderEntry,
};
use guardrails_domain::constants::DISABLED_CONFIG_PROVIDER;
use guardrails_domain::ports::GuardrailsConfigProvider;
use guardrails_domain::value_objects::{ClientState, GuardrailsConfig};

/// Provider that ignores configured limits and never triggers
#[derive(Debug, Clone)]
pub struct DisabledConfigProvider {
    config: Arc<GuardrailsConfig>,
}

impl DisabledConfigProvider {
    /// Create the provider
    pub fn new() -> Self {
        Self {
            config: Arc::new(GuardrailsConfig::disabled()),
        }
    }
}

impl Default for DisabledConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GuardrailsConfigProvider for DisabledConfigProvider {
    fn get_or_create(&self, _state: &ClientState) -> Arc<GuardrailsConfig> {
        Arc::clone(&self.config)
    }
}

#[linkme::distributed_slice(GUARDRAILS_CONFIG_PROVIDERS)]
static DISABLED_PROVIDER: GuardrailsConfigProviderEntry = GuardrailsConfigProviderEntry {
    name: DISABLED_CONFIG_PROVIDER,
    description: "Every guardrail disabled, regardless of configuration",
    factory: |_defaults: &GuardrailsConfig| Ok(Arc::new(DisabledConfigProvider::new())),
};
