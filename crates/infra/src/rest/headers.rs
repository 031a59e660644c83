//! Per-client request headers
//!
//! Every [`RestClient`](super::RestClient) carries its own `RequestHeaders`
//! value. Deriving a client with another org or environment copies the
//! headers, so two clients never observe each other's changes.

use std::fmt;

use anypoint_domain::constants::{ENV_ID_HEADER, ORG_ID_HEADER};
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;

const REDACTED: &str = "<redacted>";

#[derive(Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    bearer_token: Option<String>,
    org_id: Option<String>,
    env_id: Option<String>,
    extra: Vec<(String, String)>,
}

impl RequestHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_org_id(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = Some(org_id.into());
        self
    }

    #[must_use]
    pub fn with_env_id(mut self, env_id: impl Into<String>) -> Self {
        self.env_id = Some(env_id.into());
        self
    }

    /// Add an arbitrary header; a later value for the same name replaces the
    /// earlier one.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.extra.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        self.extra.push((name, value.into()));
        self
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    pub fn org_id(&self) -> Option<&str> {
        self.org_id.as_deref()
    }

    pub fn env_id(&self) -> Option<&str> {
        self.env_id.as_deref()
    }

    /// Name/value pairs in the order they are sent.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(3 + self.extra.len());
        if let Some(token) = &self.bearer_token {
            pairs.push((AUTHORIZATION.as_str().to_string(), format!("Bearer {token}")));
        }
        if let Some(org_id) = &self.org_id {
            pairs.push((ORG_ID_HEADER.to_string(), org_id.clone()));
        }
        if let Some(env_id) = &self.env_id {
            pairs.push((ENV_ID_HEADER.to_string(), env_id.clone()));
        }
        pairs.extend(self.extra.iter().cloned());
        pairs
    }

    /// Attach every header to a request.
    pub fn apply(&self, mut builder: RequestBuilder) -> RequestBuilder {
        for (name, value) in self.pairs() {
            builder = builder.header(name, value);
        }
        builder
    }
}

/// `true` for header names whose values must never be logged.
pub(crate) fn is_sensitive(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    name == "authorization" || name == "cookie" || name.contains("token") || name.contains("secret")
}

pub(crate) fn redact(name: &str, value: &str) -> String {
    if is_sensitive(name) {
        REDACTED.to_string()
    } else {
        value.to_string()
    }
}

impl fmt::Debug for RequestHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<(String, String)> = self
            .pairs()
            .into_iter()
            .map(|(name, value)| {
                let value = redact(&name, &value);
                (name, value)
            })
            .collect();
        f.debug_struct("RequestHeaders").field("headers", &pairs).finish()
    }
}
