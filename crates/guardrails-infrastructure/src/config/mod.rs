//! Configuration management
//!
//! Loads [`AppConfig`] from defaults, an optional TOML file and
//! `GUARDRAILS__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
