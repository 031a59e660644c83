//! Provider configuration structures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BASE_URL;

/// Process-wide provider configuration, read once when the provider is
/// configured.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    /// Accept invalid TLS certificates
    #[serde(default)]
    pub insecure_tls: bool,
    /// Dump requests and responses on the wire log target
    #[serde(default)]
    pub http_wire_log: bool,
}

impl ProviderConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            username: username.into(),
            password: password.into(),
            insecure_tls: false,
            http_wire_log: false,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("insecure_tls", &self.insecure_tls)
            .field("http_wire_log", &self.http_wire_log)
            .finish()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
