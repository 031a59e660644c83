//! Configuration loader
//!
//! Loads provider configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If credentials are missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `ANYPOINT_URL`: Platform base URL (default `https://anypoint.mulesoft.com`)
//! - `ANYPOINT_USERNAME`: Operator username
//! - `ANYPOINT_PASSWORD`: Operator password
//! - `ANYPOINT_INSECURE`: Accept invalid TLS certificates (true/false)
//! - `ANYPOINT_HTTP_WIRE_LOG`: Dump requests and responses (true/false);
//!   `ANYPOINT_DEBUG` is accepted as an alias
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./anypoint.toml` or `./anypoint.json` (current working directory)
//! 2. `../anypoint.toml` or `../anypoint.json` (parent directory)
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use anypoint_domain::constants::DEFAULT_BASE_URL;
use anypoint_domain::{AnypointError, ProviderConfig, Result};
use url::Url;

pub const ENV_URL: &str = "ANYPOINT_URL";
pub const ENV_USERNAME: &str = "ANYPOINT_USERNAME";
pub const ENV_PASSWORD: &str = "ANYPOINT_PASSWORD";
pub const ENV_INSECURE: &str = "ANYPOINT_INSECURE";
pub const ENV_HTTP_WIRE_LOG: &str = "ANYPOINT_HTTP_WIRE_LOG";
pub const ENV_DEBUG: &str = "ANYPOINT_DEBUG";

const CONFIG_FILE_NAMES: &[&str] = &["anypoint.toml", "anypoint.json"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the credentials
/// are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `AnypointError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<ProviderConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from the process environment
///
/// # Errors
/// Returns `AnypointError::Config` if credentials are missing or the base
/// URL is invalid.
pub fn load_from_env() -> Result<ProviderConfig> {
    load_from_env_with(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup.
///
/// Empty values count as unset.
pub fn load_from_env_with<F>(lookup: F) -> Result<ProviderConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
    let require = |key: &str| {
        get(key).ok_or_else(|| {
            AnypointError::Config(format!("Missing required environment variable: {key}"))
        })
    };
    let flag = |key: &str| get(key).is_some_and(|value| parse_bool(&value));

    let username = require(ENV_USERNAME)?;
    let password = require(ENV_PASSWORD)?;
    let base_url = normalize_base_url(get(ENV_URL).as_deref().unwrap_or(DEFAULT_BASE_URL))?;

    Ok(ProviderConfig {
        base_url,
        username,
        password,
        insecure_tls: flag(ENV_INSECURE),
        http_wire_log: flag(ENV_HTTP_WIRE_LOG) || flag(ENV_DEBUG),
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `AnypointError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<ProviderConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(AnypointError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            AnypointError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| AnypointError::Config(format!("Failed to read config file: {e}")))?;

    let mut config = parse_config(&contents, &config_path)?;
    config.base_url = normalize_base_url(&config.base_url)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ProviderConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| AnypointError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| AnypointError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(AnypointError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Validate a base URL, prefixing `https://` when no scheme is given and
/// dropping any trailing slash.
///
/// # Errors
/// Returns `AnypointError::Config` for unparsable URLs or non-HTTP schemes.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_BASE_URL.to_string());
    }

    let candidate =
        if trimmed.contains("://") { trimmed.to_string() } else { format!("https://{trimmed}") };

    let url = Url::parse(&candidate)
        .map_err(|e| AnypointError::Config(format!("Invalid base URL '{raw}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(AnypointError::Config(format!(
            "Invalid base URL '{raw}': expected an http(s) URL with a host"
        )));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Parse a boolean flag
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_parse_bool() {
        for value in ["1", "true", "YES", " on "] {
            assert!(parse_bool(value), "{value}");
        }
        for value in ["0", "false", "no", "off", ""] {
            assert!(!parse_bool(value), "{value}");
        }
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let config = load_from_env_with(lookup(&[
            (ENV_URL, "anypoint.example.com"),
            (ENV_USERNAME, "ops"),
            (ENV_PASSWORD, "pw"),
            (ENV_INSECURE, "true"),
            (ENV_HTTP_WIRE_LOG, "1"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://anypoint.example.com");
        assert_eq!(config.username, "ops");
        assert_eq!(config.password, "pw");
        assert!(config.insecure_tls);
        assert!(config.http_wire_log);
    }

    #[test]
    fn test_load_from_env_defaults() {
        let config =
            load_from_env_with(lookup(&[(ENV_USERNAME, "ops"), (ENV_PASSWORD, "pw")])).unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.insecure_tls);
        assert!(!config.http_wire_log);
    }

    #[test]
    fn test_debug_alias_enables_wire_log() {
        let config = load_from_env_with(lookup(&[
            (ENV_USERNAME, "ops"),
            (ENV_PASSWORD, "pw"),
            (ENV_DEBUG, "true"),
        ]))
        .unwrap();

        assert!(config.http_wire_log);
    }

    #[test]
    fn test_load_from_env_missing_credentials() {
        let err = load_from_env_with(lookup(&[(ENV_USERNAME, "ops")])).unwrap_err();
        match err {
            AnypointError::Config(msg) => assert!(msg.contains(ENV_PASSWORD)),
            other => panic!("expected config error, got {other:?}"),
        }

        let err =
            load_from_env_with(lookup(&[(ENV_USERNAME, " "), (ENV_PASSWORD, "pw")])).unwrap_err();
        assert!(matches!(err, AnypointError::Config(_)));
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("").unwrap(), DEFAULT_BASE_URL);
        assert_eq!(
            normalize_base_url("eu1.anypoint.mulesoft.com").unwrap(),
            "https://eu1.anypoint.mulesoft.com"
        );
        assert_eq!(normalize_base_url("http://localhost:8080/").unwrap(), "http://localhost:8080");
        assert!(normalize_base_url("ftp://example.com").is_err());
        assert!(normalize_base_url("https://exa mple.com").is_err());
    }

    #[test]
    fn test_parse_config_rejects_unknown_extension() {
        let err = parse_config("", Path::new("anypoint.yaml")).unwrap_err();
        assert!(matches!(err, AnypointError::Config(_)));
    }
}
