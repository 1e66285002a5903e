//! Configuration provider bootstrap
//!
//! The configuration provider is resolved once at startup and installed
//! process-wide. After installation it is read-only: every guard evaluation
//! reads the same provider without locking.

use std::sync::Arc;

use guardrails_application::GuardrailsService;
use guardrails_application::ports::registry::build_config_provider;
use guardrails_domain::error::{Error, Result};
use guardrails_domain::ports::GuardrailsConfigProvider;
use once_cell::sync::OnceCell;
use tracing::info;

use crate::config::GuardrailsSettings;

static CONFIG_PROVIDER: OnceCell<Arc<dyn GuardrailsConfigProvider>> = OnceCell::new();

/// Resolve the configured provider and install it process-wide
///
/// Fails with a configuration error when the provider cannot be resolved or
/// when a provider is already installed.
pub fn install_config_provider(
    settings: &GuardrailsSettings,
) -> Result<Arc<dyn GuardrailsConfigProvider>> {
    let provider = build_config_provider(&settings.provider, &settings.thresholds)?;

    CONFIG_PROVIDER
        .set(Arc::clone(&provider))
        .map_err(|_| Error::configuration("Guardrails config provider is already installed"))?;

    info!(provider = %settings.provider, "Guardrails config provider installed");
    Ok(provider)
}

/// The installed configuration provider
pub fn config_provider() -> Result<Arc<dyn GuardrailsConfigProvider>> {
    CONFIG_PROVIDER
        .get()
        .cloned()
        .ok_or_else(|| Error::internal("Guardrails config provider has not been installed"))
}

/// Guardrails service over the installed configuration provider
pub fn guardrails_service() -> Result<GuardrailsService> {
    config_provider().map(GuardrailsService::new)
}
