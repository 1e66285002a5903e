//! Application configuration root

use super::{GuardrailsSettings, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Guardrails provider selection and default thresholds
    pub guardrails: GuardrailsSettings,

    /// Logging configuration
    pub logging: LoggingConfig,
}
