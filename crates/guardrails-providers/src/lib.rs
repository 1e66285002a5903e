//! # Guardrails Providers
//!
//! Built-in [`GuardrailsConfigProvider`](guardrails_domain::ports::GuardrailsConfigProvider)
//! implementations. Each registers itself into
//! [`GUARDRAILS_CONFIG_PROVIDERS`](guardrails_application::ports::registry::GUARDRAILS_CONFIG_PROVIDERS)
//! at link time; crates that resolve providers by name must link this crate
//! (e.g. `extern crate guardrails_providers;`).
//!
//! | Name | Provider |
//! |------|----------|
//! | `default` | [`DefaultConfigProvider`](config::DefaultConfigProvider) |
//! | `disabled` | [`DisabledConfigProvider`](config::DisabledConfigProvider) |

pub mod config;

pub use config::{DefaultConfigProvider, DisabledConfigProvider};
