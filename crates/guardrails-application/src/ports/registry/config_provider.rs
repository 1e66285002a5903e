//! Guardrails Config Provider Registry
//!
//! Auto-registration system for guardrails configuration providers.
//! Providers register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime by name.

use std::sync::Arc;

use guardrails_domain::constants::DEFAULT_CONFIG_PROVIDER;
use guardrails_domain::error::{Error, Result};
use guardrails_domain::ports::GuardrailsConfigProvider;
use guardrails_domain::value_objects::GuardrailsConfig;
use tracing::{error, info};

/// Factory creating a provider from the process-wide default configuration
pub type GuardrailsConfigProviderFactory =
    fn(&GuardrailsConfig) -> std::result::Result<Arc<dyn GuardrailsConfigProvider>, String>;

/// Registry entry for guardrails configuration providers
///
/// Each provider implementation registers itself with this entry. The entry
/// contains metadata and a factory function receiving the default
/// configuration loaded at startup.
pub struct GuardrailsConfigProviderEntry {
    /// Unique provider name (e.g., "default", "disabled")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: GuardrailsConfigProviderFactory,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static GUARDRAILS_CONFIG_PROVIDERS: [GuardrailsConfigProviderEntry] = [..];

/// Build the configuration provider registered as `identifier`
///
/// An empty identifier selects the built-in default provider. When the
/// identifier is not registered, or its factory fails, the error is a
/// configuration error; callers must not fall back to another provider.
///
/// # Arguments
/// * `identifier` - Registered provider name
/// * `defaults` - Process-wide default configuration handed to the factory
pub fn build_config_provider(
    identifier: &str,
    defaults: &GuardrailsConfig,
) -> Result<Arc<dyn GuardrailsConfigProvider>> {
    let name = match identifier.trim() {
        "" => DEFAULT_CONFIG_PROVIDER,
        name => name,
    };

    let Some(entry) = GUARDRAILS_CONFIG_PROVIDERS
        .iter()
        .find(|entry| entry.name == name)
    else {
        let available: Vec<&str> = GUARDRAILS_CONFIG_PROVIDERS.iter().map(|e| e.name).collect();
        error!(
            provider = name,
            ?available,
            "Unknown guardrails config provider"
        );
        return Err(Error::configuration(unable_to_find(name)));
    };

    let provider = (entry.factory)(defaults).map_err(|err| {
        error!(provider = name, error = %err, "Guardrails config provider factory failed");
        Error::configuration_with_source(unable_to_find(name), err)
    })?;

    info!(provider = name, "Guardrails config provider resolved");
    Ok(provider)
}

fn unable_to_find(name: &str) -> String {
    format!(
        "Unable to find custom guardrails config provider class '{}'",
        name
    )
}

/// List all registered guardrails configuration providers
///
/// Returns a list of (name, description) tuples sorted by name.
/// Useful for CLI help.
pub fn list_config_providers() -> Vec<(&'static str, &'static str)> {
    let mut providers: Vec<(&'static str, &'static str)> = GUARDRAILS_CONFIG_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect();
    providers.sort_unstable();
    providers
}
