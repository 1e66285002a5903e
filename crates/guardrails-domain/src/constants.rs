//! Domain constants

/// Threshold value that disables a warn or abort limit
pub const DISABLED_THRESHOLD: i64 = -1;

/// Identifier of the built-in configuration provider
pub const DEFAULT_CONFIG_PROVIDER: &str = "default";

/// Identifier of the provider that disables every guardrail
pub const DISABLED_CONFIG_PROVIDER: &str = "disabled";
