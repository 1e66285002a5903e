//! Guardrail evaluators

pub mod outcome;
pub mod threshold;

pub use outcome::GuardOutcome;
pub use threshold::Threshold;
