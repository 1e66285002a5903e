//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `guardrails_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "guardrails.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "guardrails";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "GUARDRAILS";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "GUARDRAILS_LOG";

/// File stem for rolling log files
pub const DEFAULT_LOG_FILE_STEM: &str = "guardrails";
