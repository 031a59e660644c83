//! Login and session types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /accounts/login`
#[derive(Clone, Serialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginPayload")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Login response
#[derive(Clone, Default, Deserialize)]
pub struct AuthToken {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// Response of `GET /accounts/api/me`, reduced to what the provider needs.
#[derive(Debug, Clone, Deserialize)]
pub struct Me {
    pub user: MeUser,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeUser {
    pub id: String,
    #[serde(default)]
    pub username: String,
    pub organization: OrganizationRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationRef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}
