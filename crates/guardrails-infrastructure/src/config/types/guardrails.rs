//! Guardrails configuration types

use guardrails_domain::constants::DEFAULT_CONFIG_PROVIDER;
use guardrails_domain::value_objects::GuardrailsConfig;
use serde::{Deserialize, Serialize};

/// Guardrails settings
///
/// ```toml
/// [guardrails]
/// provider = "default"
///
/// [guardrails.thresholds.tables]
/// warn_threshold = 150
/// abort_threshold = 200
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardrailsSettings {
    /// Registered name of the configuration provider
    pub provider: String,

    /// Process-wide default thresholds handed to the provider
    pub thresholds: GuardrailsConfig,
}

impl Default for GuardrailsSettings {
    fn default() -> Self {
        Self {
            provider: DEFAULT_CONFIG_PROVIDER.to_string(),
            thresholds: GuardrailsConfig::default(),
        }
    }
}
