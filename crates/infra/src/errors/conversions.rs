//! Conversions from external infrastructure errors into domain errors.

use anypoint_domain::AnypointError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use url::ParseError as UrlError;

use crate::rest::status::classify_status;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub AnypointError);

impl From<InfraError> for AnypointError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<AnypointError> for InfraError {
    fn from(value: AnypointError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoAnypointError {
    fn into_anypoint(self) -> AnypointError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → AnypointError */
/* -------------------------------------------------------------------------- */

impl IntoAnypointError for HttpError {
    fn into_anypoint(self) -> AnypointError {
        let target = self.url().map(|url| url.path().to_string()).unwrap_or_default();

        if self.is_timeout() {
            return AnypointError::Connection(format!("HTTP request to '{target}' timed out"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return AnypointError::Connection(format!("HTTP connection failure: {self}"));
        }

        if let Some(status) = self.status() {
            if let Some(err) = classify_status(status, &target, "") {
                return err;
            }
        }

        if self.is_decode() {
            return AnypointError::Internal(format!("failed to decode response body: {self}"));
        }

        if self.is_builder() {
            return AnypointError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        AnypointError::Connection(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_anypoint())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → AnypointError */
/* -------------------------------------------------------------------------- */

impl IntoAnypointError for JsonError {
    fn into_anypoint(self) -> AnypointError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Io => AnypointError::Connection(format!("I/O error reading JSON: {self}")),
            Category::Syntax | Category::Eof => {
                AnypointError::Internal(format!("malformed JSON: {self}"))
            }
            Category::Data => AnypointError::Internal(format!("unexpected JSON shape: {self}")),
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_anypoint())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → AnypointError */
/* -------------------------------------------------------------------------- */

impl IntoAnypointError for UrlError {
    fn into_anypoint(self) -> AnypointError {
        AnypointError::Config(format!("invalid URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_anypoint())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
