//! Login session
//!
//! A session is created once, at provider configuration time, by posting the
//! operator's credentials. The bearer token it receives is attached to every
//! client derived from the session and is never refreshed; an expired token
//! surfaces as `AuthExpired` on the next call.

use anypoint_domain::constants::LOGIN_PATH;
use anypoint_domain::{AnypointError, AuthToken, LoginPayload, ProviderConfig, Result};
use tracing::{info, instrument, warn};

use crate::rest::RestClient;

/// Authenticated connection to the platform
#[derive(Debug, Clone)]
pub struct Session {
    client: RestClient,
    username: String,
}

impl Session {
    /// Log in with the configured credentials.
    pub async fn login(config: &ProviderConfig) -> Result<Self> {
        let client = RestClient::from_config(config)?;
        Self::login_with(client, &config.username, &config.password).await
    }

    /// Log in through an already configured (unauthenticated) client.
    ///
    /// # Errors
    /// A rejected login or a response without a token is `Auth`. Transport
    /// failures keep their kind (`Connection`). No session is produced.
    #[instrument(skip(client, password))]
    pub async fn login_with(client: RestClient, username: &str, password: &str) -> Result<Self> {
        if username.is_empty() || password.is_empty() {
            return Err(AnypointError::Auth("username and password are required".into()));
        }

        let payload = LoginPayload { username: username.to_string(), password: password.to_string() };
        let token: AuthToken = client.post(LOGIN_PATH, &payload).await.map_err(|err| {
            warn!(error = %err, kind = err.label(), "login failed");
            match err {
                AnypointError::AuthExpired(_)
                | AnypointError::NotFound(_)
                | AnypointError::Remote { .. } => {
                    AnypointError::Auth(format!("login as '{username}' failed: {err}"))
                }
                other => other.context(format!("logging in as '{username}'")),
            }
        })?;

        if token.access_token.is_empty() {
            return Err(AnypointError::Auth(format!(
                "login as '{username}' returned no access token"
            )));
        }

        info!(username, base_url = %client.base_url(), "logged in");
        Ok(Self { client: client.with_bearer_token(token.access_token), username: username.to_string() })
    }

    /// Client carrying the session's bearer token.
    pub fn client(&self) -> &RestClient {
        &self.client
    }

    /// Username the session logged in as.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Client scoped to an organization and one of its environments.
    pub fn environment_client(&self, org_id: &str, env_id: &str) -> RestClient {
        self.client.with_org_id(org_id).with_env_id(env_id)
    }
}
