//! Configuration loading and management
//!
//! This module provides utilities for loading provider configuration
//! from environment variables and files.

pub mod loader;

// Re-export commonly used items
pub use loader::{
    load, load_from_env, load_from_env_with, load_from_file, normalize_base_url,
    probe_config_paths, ENV_DEBUG, ENV_HTTP_WIRE_LOG, ENV_INSECURE, ENV_PASSWORD, ENV_URL,
    ENV_USERNAME,
};
