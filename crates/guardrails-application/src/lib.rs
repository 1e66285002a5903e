//! # Guardrails Application Layer
//!
//! Orchestrates guardrail enforcement on top of the domain types.
//!
//! - [`ports::registry`] - name-based registry of configuration providers
//! - [`use_cases`] - [`GuardrailsService`](use_cases::GuardrailsService),
//!   which evaluates thresholds and routes their diagnostics

pub mod ports;
pub mod use_cases;

pub use use_cases::GuardrailsService;
