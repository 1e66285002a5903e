//! Guardrails Service Use Case
//!
//! Evaluates threshold guardrails for a request context using the limits
//! resolved by the installed configuration provider, and routes the
//! resulting diagnostics to logs and listeners.

use std::fmt;
use std::sync::Arc;

use guardrails_domain::error::Result;
use guardrails_domain::guardrails::{GuardOutcome, Threshold};
use guardrails_domain::ports::{GuardrailListener, GuardrailsConfigProvider};
use guardrails_domain::value_objects::{ClientState, GuardedResource, GuardrailsConfig};
use tracing::{error, warn};

/// Threshold enforcement over a configuration provider
///
/// Guardrails only apply to ordinary users; internal operations and
/// superusers always evaluate as valid.
#[derive(Clone)]
pub struct GuardrailsService {
    provider: Arc<dyn GuardrailsConfigProvider>,
    listeners: Vec<Arc<dyn GuardrailListener>>,
}

impl GuardrailsService {
    /// Create a service reading limits from `provider`
    pub fn new(provider: Arc<dyn GuardrailsConfigProvider>) -> Self {
        Self {
            provider,
            listeners: Vec::new(),
        }
    }

    /// Register a listener notified of warnings and aborts
    pub fn with_listener(mut self, listener: Arc<dyn GuardrailListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Configuration in force for `state`
    pub fn config_for(&self, state: &ClientState) -> Arc<GuardrailsConfig> {
        self.provider.get_or_create(state)
    }

    /// Threshold guardrail for `resource`
    pub fn threshold(&self, resource: GuardedResource) -> Threshold<ClientState> {
        let warn_provider = Arc::clone(&self.provider);
        let abort_provider = Arc::clone(&self.provider);

        Threshold::new(
            move |state: &ClientState| {
                warn_provider
                    .get_or_create(state)
                    .threshold(resource)
                    .warn_threshold()
            },
            move |state: &ClientState| {
                abort_provider
                    .get_or_create(state)
                    .threshold(resource)
                    .abort_threshold()
            },
            move |is_warning, label, value, limit| {
                threshold_message(resource, is_warning, label, value, limit)
            },
        )
        .named(resource.name())
        .with_enabled(ClientState::is_ordinary_user)
    }

    /// Evaluate `value` against the limits for `resource`
    ///
    /// Pure evaluation: nothing is logged and no listener is notified.
    pub fn guard(
        &self,
        resource: GuardedResource,
        value: u64,
        label: &str,
        state: &ClientState,
    ) -> GuardOutcome {
        self.threshold(resource).guard(value, label, state)
    }

    /// Evaluate `value` and act on the outcome
    ///
    /// Warnings are logged and forwarded to listeners; the operation may
    /// proceed. Aborts are logged, forwarded and returned as
    /// [`Error::GuardrailViolated`](guardrails_domain::Error::GuardrailViolated).
    pub fn enforce(
        &self,
        resource: GuardedResource,
        value: u64,
        label: &str,
        state: &ClientState,
    ) -> Result<GuardOutcome> {
        let guardrail = resource.name();
        let outcome = self.guard(resource, value, label, state);

        match &outcome {
            GuardOutcome::Valid => {}
            GuardOutcome::Warn { message } => {
                warn!(guardrail, value, "{}", message);
                for listener in &self.listeners {
                    listener.on_warned(guardrail, message);
                }
            }
            GuardOutcome::Abort { message } => {
                error!(guardrail, value, "{}", message);
                for listener in &self.listeners {
                    listener.on_aborted(guardrail, message);
                }
            }
        }

        outcome.into_result(guardrail)
    }
}

impl fmt::Debug for GuardrailsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardrailsService")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

fn threshold_message(
    resource: GuardedResource,
    is_warning: bool,
    label: &str,
    value: u64,
    limit: u64,
) -> String {
    format!(
        "{}: {} {} exceeds the {} threshold of {}",
        label,
        resource.description(),
        value,
        if is_warning { "warning" } else { "failure" },
        limit
    )
}
