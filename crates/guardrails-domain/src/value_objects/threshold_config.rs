//! Warn/abort limit pair for one guarded resource

use crate::constants::DISABLED_THRESHOLD;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Name used in diagnostics when a threshold is validated on its own
const UNNAMED_THRESHOLD: &str = "guardrail";

/// Warn and abort limits for a single guarded resource
///
/// Each limit is either a non-negative integer or [`DISABLED_THRESHOLD`].
/// A disabled limit never triggers. The pair is only replaced through
/// [`ThresholdConfig::set_thresholds`], and deserialized values are checked
/// the same way, so an out-of-range value cannot silently disable a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholdConfig")]
pub struct ThresholdConfig {
    /// Value above which a warning is emitted
    warn_threshold: i64,

    /// Value above which the operation is aborted
    abort_threshold: i64,
}

/// Unchecked limits as written in configuration
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub(crate) struct RawThresholdConfig {
    pub(crate) warn_threshold: i64,
    pub(crate) abort_threshold: i64,
}

impl Default for RawThresholdConfig {
    fn default() -> Self {
        Self {
            warn_threshold: DISABLED_THRESHOLD,
            abort_threshold: DISABLED_THRESHOLD,
        }
    }
}

impl TryFrom<RawThresholdConfig> for ThresholdConfig {
    type Error = Error;

    fn try_from(raw: RawThresholdConfig) -> Result<Self> {
        Self::new(raw.warn_threshold, raw.abort_threshold)
    }
}

impl ThresholdConfig {
    /// Create a threshold pair after validating it
    pub fn new(warn: i64, abort: i64) -> Result<Self> {
        let mut config = Self::disabled();
        config.set_thresholds(warn, abort)?;
        Ok(config)
    }

    /// A threshold pair with both limits disabled
    pub const fn disabled() -> Self {
        Self {
            warn_threshold: DISABLED_THRESHOLD,
            abort_threshold: DISABLED_THRESHOLD,
        }
    }

    /// Warn limit, or `None` when disabled
    pub fn warn_threshold(&self) -> Option<u64> {
        enabled_limit(self.warn_threshold)
    }

    /// Abort limit, or `None` when disabled
    pub fn abort_threshold(&self) -> Option<u64> {
        enabled_limit(self.abort_threshold)
    }

    /// Whether either limit is enabled
    pub fn is_enabled(&self) -> bool {
        self.warn_threshold().is_some() || self.abort_threshold().is_some()
    }

    /// Replace both limits
    ///
    /// The new pair is validated first; on error the previous limits are kept.
    pub fn set_thresholds(&mut self, warn: i64, abort: i64) -> Result<()> {
        self.set_named(UNNAMED_THRESHOLD, warn, abort)
    }

    /// [`ThresholdConfig::set_thresholds`] naming `name` in any error
    pub(crate) fn set_named(&mut self, name: &str, warn: i64, abort: i64) -> Result<()> {
        validate_thresholds(name, warn, abort)?;
        self.warn_threshold = warn;
        self.abort_threshold = abort;
        Ok(())
    }

    /// Validate the current limits, naming the guardrail in any error
    pub fn validate(&self, name: &str) -> Result<()> {
        validate_thresholds(name, self.warn_threshold, self.abort_threshold)
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::disabled()
    }
}

fn enabled_limit(value: i64) -> Option<u64> {
    u64::try_from(value).ok()
}

/// Check a warn/abort pair for `name`
fn validate_thresholds(name: &str, warn: i64, abort: i64) -> Result<()> {
    validate_value(name, warn)?;
    validate_value(name, abort)?;

    if warn != DISABLED_THRESHOLD && abort != DISABLED_THRESHOLD && warn > abort {
        return Err(Error::configuration(format!(
            "The warn threshold {} for {} should be lower than the abort threshold {}",
            warn, name, abort
        )));
    }
    Ok(())
}

fn validate_value(name: &str, value: i64) -> Result<()> {
    if value < DISABLED_THRESHOLD {
        return Err(Error::configuration(format!(
            "Invalid value {} for {}: negative values are not allowed, outside of -1 which disables the guardrail",
            value, name
        )));
    }
    Ok(())
}
