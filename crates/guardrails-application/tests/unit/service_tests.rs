//! Tests for GuardrailsService

use std::sync::{Arc, Mutex};

use guardrails_application::GuardrailsService;
use guardrails_domain::Error;
use guardrails_domain::guardrails::GuardOutcome;
use guardrails_domain::ports::{GuardrailListener, GuardrailsConfigProvider};
use guardrails_domain::value_objects::{ClientState, GuardedResource, GuardrailsConfig};

/// Listener capturing every notification
#[derive(Default)]
struct RecordingListener {
    warnings: Mutex<Vec<(String, String)>>,
    aborts: Mutex<Vec<(String, String)>>,
}

impl GuardrailListener for RecordingListener {
    fn on_warned(&self, guardrail: &str, message: &str) {
        self.warnings
            .lock()
            .unwrap()
            .push((guardrail.to_string(), message.to_string()));
    }

    fn on_aborted(&self, guardrail: &str, message: &str) {
        self.aborts
            .lock()
            .unwrap()
            .push((guardrail.to_string(), message.to_string()));
    }
}

fn tables_config() -> Arc<GuardrailsConfig> {
    Arc::new(
        GuardrailsConfig::default()
            .with_thresholds(GuardedResource::Tables, 10, 100)
            .unwrap(),
    )
}

fn service() -> GuardrailsService {
    let config = tables_config();
    let provider: Arc<dyn GuardrailsConfigProvider> =
        Arc::new(move |_: &ClientState| Arc::clone(&config));
    GuardrailsService::new(provider)
}

#[test]
fn test_guard_uses_provider_limits() {
    let service = service();
    let state = ClientState::for_user("alice");

    assert!(service.guard(GuardedResource::Tables, 10, "t", &state).is_valid());
    assert_eq!(
        service.guard(GuardedResource::Tables, 11, "CREATE TABLE ks.t", &state),
        GuardOutcome::Warn {
            message: "CREATE TABLE ks.t: number of tables 11 exceeds the warning threshold of 10"
                .to_string()
        }
    );
    assert_eq!(
        service
            .guard(GuardedResource::Tables, 101, "CREATE TABLE ks.t", &state)
            .message(),
        Some("CREATE TABLE ks.t: number of tables 101 exceeds the failure threshold of 100")
    );
}

#[test]
fn test_unconfigured_resource_is_valid() {
    let service = service();
    let state = ClientState::for_user("alice");

    assert!(
        service
            .guard(GuardedResource::PageSize, u64::MAX, "SELECT", &state)
            .is_valid()
    );
}

#[test]
fn test_superusers_and_internal_bypass() {
    let service = service();

    let superuser = ClientState::for_user("admin").with_super_user(true);
    assert!(service.guard(GuardedResource::Tables, 1000, "t", &superuser).is_valid());
    assert!(
        service
            .guard(GuardedResource::Tables, 1000, "t", &ClientState::internal())
            .is_valid()
    );
}

#[test]
fn test_enforce_warn_notifies_and_proceeds() {
    let listener = Arc::new(RecordingListener::default());
    let service = service().with_listener(listener.clone());

    let outcome = service
        .enforce(GuardedResource::Tables, 25, "A", &ClientState::for_user("alice"))
        .unwrap();

    assert!(outcome.is_warning());
    let warnings = listener.warnings.lock().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].0, "tables");
    assert_eq!(
        warnings[0].1,
        "A: number of tables 25 exceeds the warning threshold of 10"
    );
    assert!(listener.aborts.lock().unwrap().is_empty());
}

#[test]
fn test_enforce_abort_returns_violation() {
    let listener = Arc::new(RecordingListener::default());
    let service = service().with_listener(listener.clone());

    let err = service
        .enforce(GuardedResource::Tables, 101, "X", &ClientState::for_user("alice"))
        .unwrap_err();

    match err {
        Error::GuardrailViolated { guardrail, message } => {
            assert_eq!(guardrail, "tables");
            assert_eq!(
                message,
                "X: number of tables 101 exceeds the failure threshold of 100"
            );
        }
        other => panic!("expected guardrail violation, got {other:?}"),
    }
    assert_eq!(listener.aborts.lock().unwrap().len(), 1);
    assert!(listener.warnings.lock().unwrap().is_empty());
}

#[test]
fn test_enforce_valid_is_silent() {
    let listener = Arc::new(RecordingListener::default());
    let service = service().with_listener(listener.clone());

    let outcome = service
        .enforce(GuardedResource::Tables, 5, "Z", &ClientState::for_user("alice"))
        .unwrap();

    assert_eq!(outcome, GuardOutcome::Valid);
    assert!(listener.warnings.lock().unwrap().is_empty());
    assert!(listener.aborts.lock().unwrap().is_empty());
}

#[test]
fn test_per_keyspace_provider() {
    let strict = tables_config();
    let relaxed = Arc::new(GuardrailsConfig::disabled());
    let provider: Arc<dyn GuardrailsConfigProvider> = Arc::new(move |state: &ClientState| {
        match state.keyspace.as_deref() {
            Some("tenant_a") => Arc::clone(&strict),
            _ => Arc::clone(&relaxed),
        }
    });
    let service = GuardrailsService::new(provider);

    let tenant_a = ClientState::for_user("u").with_keyspace("tenant_a");
    let tenant_b = ClientState::for_user("u").with_keyspace("tenant_b");

    assert!(service.guard(GuardedResource::Tables, 500, "t", &tenant_a).is_abort());
    assert!(service.guard(GuardedResource::Tables, 500, "t", &tenant_b).is_valid());
    assert_eq!(
        service.config_for(&tenant_a).tables().abort_threshold(),
        Some(100)
    );
}
