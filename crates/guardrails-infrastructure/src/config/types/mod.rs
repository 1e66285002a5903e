//! Configuration types module

pub mod app;
pub mod guardrails;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use guardrails::GuardrailsSettings;
pub use logging::LoggingConfig;
