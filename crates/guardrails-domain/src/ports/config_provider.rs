//! Guardrails Configuration Provider Port
//!
//! Decides which [`GuardrailsConfig`] applies to a request context.
//! Implementations are registered by name and selected once at startup.

use crate::value_objects::{ClientState, GuardrailsConfig};
use std::sync::Arc;

/// Resolves the guardrails configuration for a request context
///
/// Implementations must be deterministic for a given state and safe to call
/// concurrently. A provider that caches per-context configurations is
/// responsible for its own synchronization.
pub trait GuardrailsConfigProvider: Send + Sync {
    /// Configuration in force for `state`
    fn get_or_create(&self, state: &ClientState) -> Arc<GuardrailsConfig>;
}

impl<F> GuardrailsConfigProvider for F
where
    F: Fn(&ClientState) -> Arc<GuardrailsConfig> + Send + Sync,
{
    fn get_or_create(&self, state: &ClientState) -> Arc<GuardrailsConfig> {
        self(state)
    }
}
