//! Configuration Loader Tests

use guardrails_domain::constants::DEFAULT_CONFIG_PROVIDER;
use guardrails_domain::value_objects::GuardedResource;
use guardrails_infrastructure::config::{AppConfig, ConfigLoader};
use guardrails_infrastructure::constants::DEFAULT_LOG_LEVEL;
use std::env;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("guardrails.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_app_config_default() {
    let config = AppConfig::default();
    assert_eq!(config.guardrails.provider, DEFAULT_CONFIG_PROVIDER);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(config.guardrails.thresholds.validate().is_ok());
}

#[test]
fn test_load_thresholds_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
[guardrails]
provider = "disabled"

[guardrails.thresholds.tables]
warn_threshold = 10
abort_threshold = 100

[logging]
level = "debug"
"#,
    );

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert_eq!(config.guardrails.provider, "disabled");
    assert_eq!(config.guardrails.thresholds.tables().warn_threshold(), Some(10));
    assert_eq!(config.guardrails.thresholds.tables().abort_threshold(), Some(100));
    assert_eq!(config.guardrails.thresholds.keyspaces.warn_threshold(), None);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new().with_config_path(temp_dir.path().join("absent.toml"));

    let config = loader.load().unwrap();
    assert_eq!(config.guardrails.provider, DEFAULT_CONFIG_PROVIDER);
    assert!(loader.config_path().is_some());
}

#[test]
fn test_invalid_thresholds_fail_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
[guardrails.thresholds.tables]
warn_threshold = 200
abort_threshold = 100
"#,
    );

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
    assert!(err.is_configuration());
    assert!(
        err.to_string()
            .contains("The warn threshold 200 for tables should be lower than the abort threshold 100"),
        "{err}"
    );
}

#[test]
fn test_negative_threshold_fails_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
[guardrails.thresholds.page_size]
abort_threshold = -5
"#,
    );

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
    assert!(err.is_configuration());
    let message = err.to_string();
    assert!(message.contains("Invalid value -5 for page_size"), "{message}");
    assert!(!message.contains("Unable to find"), "{message}");
}

#[test]
fn test_invalid_log_level_fails_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[logging]\nlevel = \"loud\"\n");

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
    assert!(err.to_string().contains("Invalid log level: loud"), "{err}");
}

#[test]
fn test_malformed_file_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[guardrails.thresholds.tables]\nwarn_threshold = \"ten\"\n");

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
    assert!(err.is_configuration(), "{err:?}");
    assert!(err.to_string().contains("Failed to extract configuration"), "{err}");
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let mut config = AppConfig::default();
    config.guardrails.provider = "disabled".to_string();
    config
        .guardrails
        .thresholds
        .set_thresholds(GuardedResource::Tables, 5, 50)
        .unwrap();

    let loader = ConfigLoader::new();
    loader.save_to_file(&config, &config_path).unwrap();

    let loaded = ConfigLoader::new().with_config_path(&config_path).load().unwrap();
    assert_eq!(loaded.guardrails.provider, "disabled");
    assert_eq!(loaded.guardrails.thresholds, config.guardrails.thresholds);
}

/// Verify nested environment variables override file values
///
/// Run with: `cargo test -p guardrails-infrastructure --test unit -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
[guardrails.thresholds.tables]
warn_threshold = 10
abort_threshold = 100
"#,
    );

    // SAFETY: Test must run with --test-threads=1
    unsafe {
        env::set_var("GUARDRAILS__GUARDRAILS__THRESHOLDS__TABLES__WARN_THRESHOLD", "20");
        env::set_var("GUARDRAILS__GUARDRAILS__PROVIDER", "disabled");
    }

    let result = ConfigLoader::new().with_config_path(&path).load();

    // SAFETY: Test must run with --test-threads=1
    unsafe {
        env::remove_var("GUARDRAILS__GUARDRAILS__THRESHOLDS__TABLES__WARN_THRESHOLD");
        env::remove_var("GUARDRAILS__GUARDRAILS__PROVIDER");
    }

    let config = result.unwrap();
    assert_eq!(config.guardrails.thresholds.tables().warn_threshold(), Some(20));
    assert_eq!(config.guardrails.thresholds.tables().abort_threshold(), Some(100));
    assert_eq!(config.guardrails.provider, "disabled");
}
