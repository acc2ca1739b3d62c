//! Unit tests for environment-driven configuration.

use flink_catalog_types::config::{Config, LogFormat};
use serial_test::serial;

fn clear_env() {
    for key in [
        "FLINK_TYPES_LOG_LEVEL",
        "FLINK_TYPES_LOG_FORMAT",
        "FLINK_TYPES_PRETTY",
    ] {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
#[serial]
fn test_config_from_env_defaults() {
    clear_env();
    let config = Config::from_env();

    assert_eq!(config.log_level, "info");
    assert_eq!(config.log_format, LogFormat::Text);
    assert!(config.pretty_output);
}

#[test]
#[serial]
fn test_config_from_env_values() {
    clear_env();
    unsafe {
        std::env::set_var("FLINK_TYPES_LOG_LEVEL", "flink_catalog_types=debug");
        std::env::set_var("FLINK_TYPES_LOG_FORMAT", "json");
        std::env::set_var("FLINK_TYPES_PRETTY", "0");
    }

    let config = Config::from_env();
    clear_env();

    assert_eq!(config.log_level, "flink_catalog_types=debug");
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(!config.pretty_output);
}

#[test]
#[serial]
fn test_config_ignores_unknown_values() {
    clear_env();
    unsafe {
        std::env::set_var("FLINK_TYPES_LOG_LEVEL", "   ");
        std::env::set_var("FLINK_TYPES_LOG_FORMAT", "xml");
        std::env::set_var("FLINK_TYPES_PRETTY", "maybe");
    }

    let config = Config::from_env();
    clear_env();

    assert_eq!(config, Config::default());
}
