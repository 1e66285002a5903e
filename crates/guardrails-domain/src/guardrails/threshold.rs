//! Threshold guardrail
//!
//! A [`Threshold`] compares a measured value against a warn limit and an
//! abort limit. Both limits are read through projections of the evaluation
//! context, so the same evaluator serves a static global policy and
//! per-tenant policies alike.
//!
//! Evaluation order is fixed: the abort limit is checked first, so abort
//! always wins when both limits are exceeded. A value equal to a limit does
//! not trigger it.

use super::outcome::GuardOutcome;
use std::fmt;
use std::sync::Arc;

type LimitFn<C> = Arc<dyn Fn(&C) -> Option<u64> + Send + Sync>;
type EnabledFn<C> = Arc<dyn Fn(&C) -> bool + Send + Sync>;
type MessageFn = Arc<dyn Fn(bool, &str, u64, u64) -> String + Send + Sync>;

/// Default name for thresholds built without [`Threshold::named`]
const UNNAMED: &str = "threshold";

/// Stateless warn/abort evaluator over a context of type `C`
pub struct Threshold<C> {
    name: String,
    warn_limit: LimitFn<C>,
    abort_limit: LimitFn<C>,
    format_message: MessageFn,
    enabled: Option<EnabledFn<C>>,
}

impl<C> Threshold<C> {
    /// Create a threshold from its limit projections and message formatter
    ///
    /// `format_message` receives `(is_warning, label, value, limit)`.
    pub fn new<W, A, M>(warn_limit: W, abort_limit: A, format_message: M) -> Self
    where
        W: Fn(&C) -> Option<u64> + Send + Sync + 'static,
        A: Fn(&C) -> Option<u64> + Send + Sync + 'static,
        M: Fn(bool, &str, u64, u64) -> String + Send + Sync + 'static,
    {
        Self {
            name: UNNAMED.to_string(),
            warn_limit: Arc::new(warn_limit),
            abort_limit: Arc::new(abort_limit),
            format_message: Arc::new(format_message),
            enabled: None,
        }
    }

    /// Set the guardrail name reported in logs and violations
    pub fn named<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Only evaluate limits for contexts accepted by `enabled`
    pub fn with_enabled<E>(mut self, enabled: E) -> Self
    where
        E: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.enabled = Some(Arc::new(enabled));
        self
    }

    /// Guardrail name
    pub fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, ctx: &C) -> bool {
        self.enabled.as_ref().is_none_or(|enabled| enabled(ctx))
    }

    /// Evaluate `value` for the operation described by `label`
    pub fn guard(&self, value: u64, label: &str, ctx: &C) -> GuardOutcome {
        if !self.is_enabled(ctx) {
            return GuardOutcome::Valid;
        }

        if let Some(limit) = (self.abort_limit)(ctx).filter(|limit| value > *limit) {
            return GuardOutcome::Abort {
                message: (self.format_message)(false, label, value, limit),
            };
        }

        if let Some(limit) = (self.warn_limit)(ctx).filter(|limit| value > *limit) {
            return GuardOutcome::Warn {
                message: (self.format_message)(true, label, value, limit),
            };
        }

        GuardOutcome::Valid
    }

    /// Whether `value` would warn or abort in `ctx`
    pub fn triggers_on(&self, value: u64, ctx: &C) -> bool {
        if !self.is_enabled(ctx) {
            return false;
        }
        let exceeds = |limit: Option<u64>| limit.is_some_and(|limit| value > limit);
        exceeds((self.abort_limit)(ctx)) || exceeds((self.warn_limit)(ctx))
    }
}

impl<C> Clone for Threshold<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            warn_limit: Arc::clone(&self.warn_limit),
            abort_limit: Arc::clone(&self.abort_limit),
            format_message: Arc::clone(&self.format_message),
            enabled: self.enabled.clone(),
        }
    }
}

impl<C> fmt::Debug for Threshold<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Threshold")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
