//! REST client for the Anypoint platform API
//!
//! Wraps [`HttpClient`] with the platform base URL, per-client headers, typed
//! JSON responses and status classification. Every call is a single attempt.

use std::sync::Arc;

use anypoint_domain::{AnypointError, ProviderConfig, Result};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

use super::content_type::ContentType;
use super::headers::RequestHeaders;
use super::status::classify_status;
use super::wire;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Body of an outgoing request, already encoded.
struct EncodedBody {
    bytes: Vec<u8>,
    content_type: ContentType,
}

/// HTTP client bound to one base URL and one set of request headers.
///
/// Cloning is cheap; the transport is shared.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Arc<HttpClient>,
    base_url: Url,
    headers: RequestHeaders,
    wire_log: bool,
}

impl RestClient {
    /// Client for `base_url` with a default transport.
    pub fn new(base_url: &str, insecure_tls: bool) -> Result<Self> {
        let http = HttpClient::builder().accept_invalid_certs(insecure_tls).build()?;
        Self::with_http_client(http, base_url)
    }

    /// Client configured from the process configuration.
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        Ok(Self::new(&config.base_url, config.insecure_tls)?.with_wire_log(config.http_wire_log))
    }

    pub fn with_http_client(http: HttpClient, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(InfraError::from)
            .map_err(|err| AnypointError::from(err).context(format!("base URL '{base_url}'")))?;

        Ok(Self { http: Arc::new(http), base_url, headers: RequestHeaders::new(), wire_log: false })
    }

    #[must_use]
    pub fn with_wire_log(mut self, enabled: bool) -> Self {
        self.wire_log = enabled;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn headers(&self) -> &RequestHeaders {
        &self.headers
    }

    /// Copy of this client that sends `Authorization: Bearer <token>`.
    #[must_use]
    pub fn with_bearer_token(&self, token: impl Into<String>) -> Self {
        self.with_headers(self.headers.clone().with_bearer_token(token))
    }

    /// Copy of this client scoped to an organization.
    #[must_use]
    pub fn with_org_id(&self, org_id: impl Into<String>) -> Self {
        self.with_headers(self.headers.clone().with_org_id(org_id))
    }

    /// Copy of this client scoped to an environment.
    #[must_use]
    pub fn with_env_id(&self, env_id: impl Into<String>) -> Self {
        self.with_headers(self.headers.clone().with_env_id(env_id))
    }

    #[must_use]
    pub fn with_header(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_headers(self.headers.clone().with_header(name, value))
    }

    fn with_headers(&self, headers: RequestHeaders) -> Self {
        Self { headers, ..self.clone() }
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        self.execute(Method::GET, path, None::<&()>, None).await
    }

    /// GET with query parameters serialized from `params`.
    pub async fn get_with_params<Q, R>(&self, path: &str, params: &Q) -> Result<R>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(Method::GET, path, Some(params), None).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.post_as(path, body, ContentType::Json).await
    }

    pub async fn post_as<B, R>(&self, path: &str, body: &B, content_type: ContentType) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode(body, content_type)?;
        self.execute(Method::POST, path, None::<&()>, Some(body)).await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.put_as(path, body, ContentType::Json).await
    }

    pub async fn put_as<B, R>(&self, path: &str, body: &B, content_type: ContentType) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode(body, content_type)?;
        self.execute(Method::PUT, path, None::<&()>, Some(body)).await
    }

    pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.patch_as(path, body, ContentType::Json).await
    }

    pub async fn patch_as<B, R>(&self, path: &str, body: &B, content_type: ContentType) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode(body, content_type)?;
        self.execute(Method::PATCH, path, None::<&()>, Some(body)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        self.execute(Method::DELETE, path, None::<&()>, None).await
    }

    /// DELETE carrying a request body.
    pub async fn delete_with_body<B, R>(
        &self,
        path: &str,
        body: &B,
        content_type: ContentType,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode(body, content_type)?;
        self.execute(Method::DELETE, path, None::<&()>, Some(body)).await
    }

    /// Absolute URL of an API path.
    pub fn url(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Url::parse(&format!("{base}/{path}")).map_err(|err| InfraError::from(err).into())
    }

    #[instrument(skip(self, query, body), fields(method = %method, path = %path))]
    async fn execute<Q, R>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<EncodedBody>,
    ) -> Result<R>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let resource = format!("{method} {path}");
        let url = self.url(path)?;

        let mut builder = self.headers.apply(self.http.request(method.clone(), url));
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, body.content_type.to_string())
                .body(body.bytes);
        }

        let request = self.http.build(builder)?;
        if self.wire_log {
            wire::log_request(&request);
        }
        let url = request.url().to_string();

        let response = self.http.execute(request).await?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(InfraError::from)?;

        if self.wire_log {
            wire::log_response(method.as_str(), &url, status, &bytes);
        }

        if let Some(err) = classify_status(status, &resource, &String::from_utf8_lossy(&bytes)) {
            debug!(%status, error = %err, "request rejected");
            return Err(err);
        }

        decode(status, &bytes).map_err(|err| err.context(format!("reading response of {resource}")))
    }
}

fn encode<B: Serialize + ?Sized>(body: &B, content_type: ContentType) -> Result<EncodedBody> {
    Ok(EncodedBody { bytes: content_type.encode(body)?, content_type })
}

/// Deserialize a successful response; no-content responses decode from
/// `null` so `()` and `Option<T>` work.
fn decode<R: DeserializeOwned>(status: StatusCode, bytes: &[u8]) -> Result<R> {
    let no_content = status == StatusCode::NO_CONTENT
        || status == StatusCode::RESET_CONTENT
        || bytes.iter().all(u8::is_ascii_whitespace);

    if no_content {
        return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
            AnypointError::Internal(format!(
                "no content response ({}), but a value was expected",
                status.as_u16()
            ))
        });
    }

    Ok(serde_json::from_slice(bytes).map_err(InfraError::from)?)
}
