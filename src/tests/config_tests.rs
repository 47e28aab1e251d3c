//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    entities::ExtraEntity, output::DeclarationStyle, output::OutputConfig, table::TableConfig,
    ConfigLoader, LogConfig, MakaiConfig, Validate,
};
use crate::tests::test_utils::create_test_dir;
use std::fs;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = MakaiConfig::default();
    assert!(config.validate().is_ok());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = MakaiConfig::default();

    // Invalid table configuration
    config.table.max_depth = 0;
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.table.max_depth = 64;
    config.output.symbol = "2fast".to_string();
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.output.symbol = "fsm".to_string();
    config.entities.extra.push(ExtraEntity {
        sequence: "&nbsp;".to_string(),
        code: 0,
    });
    assert!(config.validate().is_err());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    // Clean environment variables that might affect this test
    std::env::remove_var("MAKAI_FILE__TABLE__MAX_DEPTH");
    std::env::remove_var("MAKAI_FILE__OUTPUT__SYMBOL");

    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("config_file_test.toml");

    // Create a minimal valid configuration file
    let config_content = r#"
    [table]
    max_depth = 16

    [output]
    symbol = "entity_fsm"
    style = "progmem-array"

    [[entities.extra]]
    sequence = "&nbsp;"
    code = 32
    "#;

    fs::write(&config_path, config_content).unwrap();

    // Load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "MAKAI_FILE");
    let config = loader.load().unwrap();

    // Verify values were loaded correctly
    assert_eq!(config.table.max_depth, 16);
    assert_eq!(config.output.symbol, "entity_fsm");
    assert_eq!(config.output.style, DeclarationStyle::ProgmemArray);
    assert_eq!(config.entities.extra.len(), 1);
    assert_eq!(config.entities.extra[0].code, 32);

    // Other values should be defaults
    assert!(config.entities.xml_builtin);
    assert!(config.entities.latin1_accents);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("config_env_test.toml");

    // Create a minimal valid configuration file
    let config_content = r#"
    [output]
    symbol = "file_symbol"
    "#;

    fs::write(&config_path, config_content).unwrap();

    // Set environment variables with a unique prefix
    std::env::set_var("MAKAI_ENV__OUTPUT__SYMBOL", "env_symbol");
    std::env::set_var("MAKAI_ENV__TABLE__MAX_DEPTH", "32");

    // Load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "MAKAI_ENV");
    let config = loader.load().unwrap();

    // Verify environment variables took precedence
    assert_eq!(config.output.symbol, "env_symbol");
    assert_eq!(config.table.max_depth, 32);

    // Clean up environment variables
    std::env::remove_var("MAKAI_ENV__OUTPUT__SYMBOL");
    std::env::remove_var("MAKAI_ENV__TABLE__MAX_DEPTH");
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("invalid.toml");

    // Create an invalid TOML file
    let config_content = r#"
    [table
    max_depth = "deep"
    "#;

    fs::write(&config_path, config_content).unwrap();

    // Try to load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "MAKAI_INVALID");
    assert!(loader.load().is_err());
}

/// Test that validation fails for various invalid configurations.
#[test]
fn test_specific_validation_rules() {
    // Test table validation
    let table_config = TableConfig { max_depth: 4096 };
    assert!(table_config.validate().is_err());

    // Test output validation
    let output_config = OutputConfig {
        symbol: "entity-table".to_string(),
        ..Default::default()
    };
    assert!(output_config.validate().is_err());

    // Test log validation
    let log_config = LogConfig {
        level: "verbose".to_string(),
        ..Default::default()
    };
    assert!(log_config.validate().is_err());
}
