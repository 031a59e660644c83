//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::path::PathBuf;

use anypoint_domain::constants::DEFAULT_BASE_URL;
use anypoint_domain::AnypointError;
use anypoint_infra::config;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write config file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "anypoint.json",
        r#"{
            "base_url": "https://eu1.anypoint.mulesoft.com/",
            "username": "ops",
            "password": "json-secret",
            "insecure_tls": true,
            "http_wire_log": true
        }"#,
    );

    let config = config::load_from_file(Some(path)).expect("Failed to load JSON config");

    assert_eq!(config.base_url, "https://eu1.anypoint.mulesoft.com");
    assert_eq!(config.username, "ops");
    assert_eq!(config.password, "json-secret");
    assert!(config.insecure_tls);
    assert!(config.http_wire_log);
}

#[test]
fn test_load_config_from_toml_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "anypoint.toml",
        r#"
base_url = "anypoint.example.com"
username = "ops"
password = "toml-secret"
"#,
    );

    let config = config::load_from_file(Some(path)).expect("Failed to load TOML config");

    assert_eq!(config.base_url, "https://anypoint.example.com");
    assert_eq!(config.password, "toml-secret");
    assert!(!config.insecure_tls);
    assert!(!config.http_wire_log);
}

#[test]
fn test_load_config_with_minimal_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "anypoint.json", r#"{ "username": "ops", "password": "pw" }"#);

    let config = config::load_from_file(Some(path)).expect("Failed to load minimal config");

    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_load_config_from_nonexistent_file() {
    let result = config::load_from_file(Some("/nonexistent/path/anypoint.json".into()));

    match result {
        Err(AnypointError::Config(msg)) => {
            assert!(msg.contains("not found"), "Error message should mention 'not found'");
        }
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_load_config_with_invalid_format() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "anypoint.json", r#"{ "this is": "not valid" "#);

    match config::load_from_file(Some(path)) {
        Err(AnypointError::Config(msg)) => {
            assert!(msg.contains("Invalid JSON"), "Error message should mention invalid JSON");
        }
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_load_config_missing_credentials() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "anypoint.toml", r#"base_url = "https://anypoint.mulesoft.com""#);

    let result = config::load_from_file(Some(path));
    assert!(matches!(result, Err(AnypointError::Config(_))));
}

#[test]
fn test_load_config_with_invalid_base_url() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "anypoint.json",
        r#"{ "base_url": "ftp://files.example.com", "username": "ops", "password": "pw" }"#,
    );

    let result = config::load_from_file(Some(path));
    assert!(matches!(result, Err(AnypointError::Config(_))));
}
