//! Provider Registry System
//!
//! Auto-registration infrastructure for guardrails configuration providers.
//! Uses the `linkme` crate for compile-time registration of providers that
//! are selected by name when the process starts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                       │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  1. Provider defines:  #[linkme::distributed_slice(                 │
//! │                            GUARDRAILS_CONFIG_PROVIDERS)]            │
//! │                        static ENTRY: ...Entry = ...                 │
//! │                              ↓                                      │
//! │  2. Registry declares: #[linkme::distributed_slice]                 │
//! │                        pub static GUARDRAILS_CONFIG_PROVIDERS       │
//! │                              ↓                                      │
//! │  3. Resolver queries:  GUARDRAILS_CONFIG_PROVIDERS.iter()           │
//! │                              ↓                                      │
//! │  4. Config selects:    "provider = default" → Default provider      │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider
//!
//! ```ignore
//! use guardrails_application::ports::registry::{
//!     GUARDRAILS_CONFIG_PROVIDERS, GuardrailsConfigProviderEntry,
//! };
//!
//! #[linkme::distributed_slice(GUARDRAILS_CONFIG_PROVIDERS)]
//! static PER_TENANT_PROVIDER: GuardrailsConfigProviderEntry = GuardrailsConfigProviderEntry {
//!     name: "per_tenant",
//!     description: "Per-tenant guardrail limits",
//!     factory: |defaults| Ok(Arc::new(PerTenantProvider::new(defaults.clone()))),
//! };
//! ```
//!
//! ### Resolving a Provider
//!
//! ```ignore
//! use guardrails_application::ports::registry::build_config_provider;
//!
//! let provider = build_config_provider("per_tenant", &defaults)?;
//! ```

pub mod config_provider;

pub use config_provider::{
    GUARDRAILS_CONFIG_PROVIDERS, GuardrailsConfigProviderEntry, build_config_provider,
    list_config_providers,
};
