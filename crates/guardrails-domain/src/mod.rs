//! # Guardrails Domain
//!
//! Core types for runtime guardrails: threshold configuration values,
//! the per-context configuration aggregate, the threshold evaluator and
//! the ports implemented by configuration providers and listeners.
//!
//! ## Architecture
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Sentinels and well-known identifiers |
//! | [`value_objects`] | `ThresholdConfig`, `GuardrailsConfig`, `ClientState` |
//! | [`guardrails`] | `Threshold` evaluator and `GuardOutcome` |
//! | [`ports`] | `GuardrailsConfigProvider` and `GuardrailListener` traits |
//!
//! ## Example
//!
//! ```
//! use guardrails_domain::guardrails::Threshold;
//!
//! let guard = Threshold::new(
//!     |_: &()| Some(10),
//!     |_: &()| Some(100),
//!     |is_warning, what, value, limit| {
//!         format!("{}: for {what}, {value} > {limit}", if is_warning { "Warning" } else { "Aborting" })
//!     },
//! );
//!
//! assert!(guard.guard(5, "Z", &()).is_valid());
//! assert_eq!(guard.guard(25, "A", &()).message(), Some("Warning: for A, 25 > 10"));
//! ```

pub mod constants;
pub mod error;
pub mod guardrails;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use guardrails::{GuardOutcome, Threshold};
pub use ports::{GuardrailListener, GuardrailsConfigProvider};
pub use value_objects::{ClientState, GuardedResource, GuardrailsConfig, ThresholdConfig};
