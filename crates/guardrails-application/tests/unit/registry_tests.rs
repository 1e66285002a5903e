//! Tests for the guardrails config provider registry
//!
//! Registers a custom provider from this test binary through linkme, the
//! same way an operator-supplied crate would, and resolves it by name.

// Force linkme registration of the built-in providers
extern crate guardrails_providers;

use std::sync::Arc;

use guardrails_application::ports::registry::{
    GUARDRAILS_CONFIG_PROVIDERS, GuardrailsConfigProviderEntry, build_config_provider,
    list_config_providers,
};
use guardrails_domain::guardrails::Threshold;
use guardrails_domain::ports::GuardrailsConfigProvider;
use guardrails_domain::value_objects::{ClientState, GuardedResource, GuardrailsConfig};

const CUSTOM_PROVIDER: &str = "registry_tests::custom_provider";
const BROKEN_PROVIDER: &str = "registry_tests::broken_provider";

/// Custom provider that ignores the defaults and builds fixed table limits
struct CustomProvider;

impl GuardrailsConfigProvider for CustomProvider {
    fn get_or_create(&self, _state: &ClientState) -> Arc<GuardrailsConfig> {
        let mut config = GuardrailsConfig::default();
        config
            .set_thresholds(GuardedResource::Tables, 10, 100)
            .expect("fixed thresholds are valid");
        Arc::new(config)
    }
}

#[linkme::distributed_slice(GUARDRAILS_CONFIG_PROVIDERS)]
static CUSTOM: GuardrailsConfigProviderEntry = GuardrailsConfigProviderEntry {
    name: CUSTOM_PROVIDER,
    description: "Fixed tables limits of 10/100",
    factory: |_defaults: &GuardrailsConfig| Ok(Arc::new(CustomProvider)),
};

#[linkme::distributed_slice(GUARDRAILS_CONFIG_PROVIDERS)]
static BROKEN: GuardrailsConfigProviderEntry = GuardrailsConfigProviderEntry {
    name: BROKEN_PROVIDER,
    description: "Provider whose factory always fails",
    factory: |_defaults: &GuardrailsConfig| Err("missing tenant directory".to_string()),
};

fn user() -> ClientState {
    ClientState::for_user("user")
}

#[test]
fn test_build_custom() {
    let provider = build_config_provider(CUSTOM_PROVIDER, &GuardrailsConfig::default())
        .unwrap_or_else(|e| panic!("custom provider should resolve: {e}"));

    let warn_provider = Arc::clone(&provider);
    let guard = Threshold::new(
        move |state: &ClientState| warn_provider.get_or_create(state).tables().warn_threshold(),
        move |state: &ClientState| provider.get_or_create(state).tables().abort_threshold(),
        |is_warn, what, v, t| {
            format!(
                "{}: for {}, {} > {}",
                if is_warn { "Warning" } else { "Aborting" },
                what,
                v,
                t
            )
        },
    );

    assert!(guard.guard(5, "Z", &user()).is_valid());
    assert_eq!(
        guard.guard(25, "A", &user()).message(),
        Some("Warning: for A, 25 > 10")
    );
    assert_eq!(
        guard.guard(100, "B", &user()).message(),
        Some("Warning: for B, 100 > 10")
    );
    let abort = guard.guard(101, "X", &user());
    assert!(abort.is_abort());
    assert_eq!(abort.message(), Some("Aborting: for X, 101 > 100"));
    let abort = guard.guard(200, "Y", &user());
    assert!(abort.is_abort());
    assert_eq!(abort.message(), Some("Aborting: for Y, 200 > 100"));
    assert!(guard.guard(5, "Z", &user()).is_valid());
}

#[test]
fn test_build_unexistent_fails() {
    let err = build_config_provider("unexistent_class", &GuardrailsConfig::default())
        .err()
        .expect("unregistered provider must fail");

    assert!(err.is_configuration(), "{err:?}");
    assert!(
        err.to_string()
            .contains("Unable to find custom guardrails config provider class 'unexistent_class'"),
        "{err}"
    );
}

#[test]
fn test_unresolved_provider_does_not_fall_back() {
    let defaults = GuardrailsConfig::default()
        .with_thresholds(GuardedResource::Tables, 1, 2)
        .unwrap();

    assert!(build_config_provider("Default", &defaults).is_err());
    assert!(build_config_provider("unexistent_class", &defaults).is_err());
}

#[test]
fn test_failing_factory_is_configuration_error() {
    let err = build_config_provider(BROKEN_PROVIDER, &GuardrailsConfig::default())
        .err()
        .expect("failing factory must fail the build");

    assert!(err.is_configuration());
    assert!(
        err.to_string().contains(&format!(
            "Unable to find custom guardrails config provider class '{}'",
            BROKEN_PROVIDER
        )),
        "{err}"
    );
    let source = std::error::Error::source(&err).expect("factory error should be kept");
    assert_eq!(source.to_string(), "missing tenant directory");
}

#[test]
fn test_listing_includes_test_registrations() {
    let names: Vec<&str> = list_config_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();

    assert!(names.contains(&CUSTOM_PROVIDER), "{names:?}");
    assert!(names.contains(&BROKEN_PROVIDER), "{names:?}");
    assert!(names.contains(&"default"), "{names:?}");

    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}
