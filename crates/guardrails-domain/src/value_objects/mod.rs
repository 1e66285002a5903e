//! Value objects

pub mod client_state;
pub mod guardrails_config;
pub mod threshold_config;

pub use client_state::ClientState;
pub use guardrails_config::{GuardedResource, GuardrailsConfig};
pub use threshold_config::ThresholdConfig;
