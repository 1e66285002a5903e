//! Guardrail Listener Port

/// Receives guardrail diagnostics
///
/// Both methods default to doing nothing so listeners only implement the
/// notifications they route.
pub trait GuardrailListener: Send + Sync {
    /// A guardrail emitted a warning; the operation proceeds
    fn on_warned(&self, _guardrail: &str, _message: &str) {}

    /// A guardrail aborted the operation
    fn on_aborted(&self, _guardrail: &str, _message: &str) {}
}
