//! Result of a single guardrail evaluation

use crate::error::{Error, Result};

/// Outcome of evaluating a guardrail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// No limit exceeded; proceed silently
    Valid,
    /// Warn limit exceeded; proceed and surface the message
    Warn {
        /// Diagnostic for the observability sink
        message: String,
    },
    /// Abort limit exceeded; the operation must not proceed
    Abort {
        /// Diagnostic for the caller
        message: String,
    },
}

impl GuardOutcome {
    /// True when no limit was exceeded
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// True when the warn limit was exceeded
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warn { .. })
    }

    /// True when the abort limit was exceeded
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Abort { .. })
    }

    /// Diagnostic message, absent for [`GuardOutcome::Valid`]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Warn { message } | Self::Abort { message } => Some(message),
        }
    }

    /// Convert an abort into [`Error::GuardrailViolated`] for `guardrail`
    pub fn into_result(self, guardrail: &str) -> Result<Self> {
        match self {
            Self::Abort { message } => Err(Error::guardrail_violated(guardrail, message)),
            other => Ok(other),
        }
    }
}
