//! Application use cases

pub mod guardrails_service;

pub use guardrails_service::GuardrailsService;
