//! Domain ports
//!
//! Traits implemented outside the domain: configuration providers live in
//! `guardrails-providers`, listeners are supplied by whoever routes
//! guardrail diagnostics.

pub mod config_provider;
pub mod listener;

pub use config_provider::GuardrailsConfigProvider;
pub use listener::GuardrailListener;
