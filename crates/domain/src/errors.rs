//! Error types used throughout the provider

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the Anypoint provider
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum AnypointError {
    /// Login failed (bad credentials, malformed token response)
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The remote API rejected the bearer token (HTTP 401)
    #[error("Authentication expired: {0}")]
    AuthExpired(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Ambiguous or otherwise unusable lookup result
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unclassified HTTP failure (>= 400 other than 401/404)
    #[error("Remote error (HTTP {status}): {detail}")]
    Remote { status: u16, detail: String },

    /// Transport failure (DNS, connect, TLS, timeout)
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AnypointError {
    /// `true` for both login failures and expired tokens.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_) | Self::AuthExpired(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Stable label suitable for structured log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Auth(_) => "auth",
            Self::AuthExpired(_) => "auth_expired",
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation",
            Self::Remote { .. } => "remote",
            Self::Connection(_) => "connection",
            Self::Config(_) => "config",
            Self::InvalidInput(_) => "invalid_input",
            Self::Unsupported(_) => "unsupported",
            Self::Internal(_) => "internal",
        }
    }

    /// Prefix the message with the operation or resource being attempted,
    /// keeping the variant intact.
    #[must_use]
    pub fn context(self, context: impl std::fmt::Display) -> Self {
        let wrap = |message: String| format!("{context}: {message}");
        match self {
            Self::Auth(m) => Self::Auth(wrap(m)),
            Self::AuthExpired(m) => Self::AuthExpired(wrap(m)),
            Self::NotFound(m) => Self::NotFound(wrap(m)),
            Self::Validation(m) => Self::Validation(wrap(m)),
            Self::Remote { status, detail } => Self::Remote { status, detail: wrap(detail) },
            Self::Connection(m) => Self::Connection(wrap(m)),
            Self::Config(m) => Self::Config(wrap(m)),
            Self::InvalidInput(m) => Self::InvalidInput(wrap(m)),
            Self::Unsupported(m) => Self::Unsupported(wrap(m)),
            Self::Internal(m) => Self::Internal(wrap(m)),
        }
    }
}

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, AnypointError>;
