//! Error type tests

use guardrails_domain::Error;

#[test]
fn test_configuration_display() {
    let err = Error::configuration("bad provider");
    assert_eq!(err.to_string(), "Configuration error: bad provider");
    assert!(err.is_configuration());
    assert!(!err.is_guardrail_violation());
}

#[test]
fn test_configuration_keeps_source() {
    let err = Error::configuration_with_source("wrapped", "factory failed".to_string());
    let source = std::error::Error::source(&err).expect("source should be kept");
    assert_eq!(source.to_string(), "factory failed");
}

#[test]
fn test_guardrail_violation_displays_message_only() {
    let err = Error::guardrail_violated("tables", "too many tables");
    assert_eq!(err.to_string(), "too many tables");
    match err {
        Error::GuardrailViolated { guardrail, .. } => assert_eq!(guardrail, "tables"),
        other => panic!("unexpected error: {other:?}"),
    }
}
