//! Request/response dumps on the `anypoint::wire` tracing target
//!
//! Enabled per client. Header values that carry credentials and JSON body
//! fields named like secrets are replaced before anything is logged.

use anypoint_domain::constants::WIRE_LOG_TARGET;
use reqwest::{Request, StatusCode};
use serde_json::Value;
use tracing::debug;

use super::headers::redact;

const REDACTED: &str = "<redacted>";
const SENSITIVE_FIELDS: &[&str] = &["password", "access_token", "client_secret", "token"];

pub(crate) fn log_request(request: &Request) {
    let headers: Vec<String> = request
        .headers()
        .iter()
        .map(|(name, value)| {
            let value = value.to_str().unwrap_or("<binary>");
            format!("{name}: {}", redact(name.as_str(), value))
        })
        .collect();
    let body = request.body().and_then(|body| body.as_bytes()).map(redact_body);

    debug!(
        target: WIRE_LOG_TARGET,
        method = %request.method(),
        url = %request.url(),
        headers = ?headers,
        body = body.as_deref().unwrap_or(""),
        "request"
    );
}

pub(crate) fn log_response(method: &str, url: &str, status: StatusCode, body: &[u8]) {
    debug!(
        target: WIRE_LOG_TARGET,
        method,
        url,
        status = status.as_u16(),
        body = %redact_body(body),
        "response"
    );
}

/// Body as text with secret-looking JSON fields masked.
pub(crate) fn redact_body(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(mut value) => {
            mask(&mut value);
            value.to_string()
        }
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}

fn mask(value: &mut Value) {
    match value {
        Value::Object(fields) => {
            for (key, field) in fields.iter_mut() {
                let key = key.to_ascii_lowercase();
                if SENSITIVE_FIELDS.iter().any(|name| key == *name) {
                    *field = Value::String(REDACTED.to_string());
                } else {
                    mask(field);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(mask),
        _ => {}
    }
}
