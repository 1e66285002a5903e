//! Application ports

pub mod registry;

// Re-export domain ports for providers that only depend on this crate
pub use guardrails_domain::ports::{GuardrailListener, GuardrailsConfigProvider};
