//! Request body content types and their encodings

use anypoint_domain::{impl_domain_str_conversions, AnypointError, Result};
use serde::Serialize;
use serde_json::Value;

use crate::errors::InfraError;

/// Content type of a request body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContentType {
    #[default]
    Json,
    OctetStream,
    Pdf,
    AtomXml,
    FormUrlEncoded,
    SvgXml,
    XhtmlXml,
    Xml,
    TextHtml,
    TextPlain,
    TextXml,
    Wildcard,
}

impl_domain_str_conversions!(ContentType {
    Json => "application/json",
    OctetStream => "application/octet-stream",
    Pdf => "application/pdf",
    AtomXml => "application/atom+xml",
    FormUrlEncoded => "application/x-www-form-urlencoded",
    SvgXml => "image/svg+xml",
    XhtmlXml => "application/xhtml+xml",
    Xml => "application/xml",
    TextHtml => "text/html",
    TextPlain => "text/plain",
    TextXml => "text/xml",
    Wildcard => "*/*",
});

impl ContentType {
    /// Encode `body` for this content type.
    ///
    /// JSON and the wildcard type serialize any value. Form bodies must
    /// serialize to a flat object. Every other type carries an opaque payload
    /// and needs a string body.
    pub fn encode<T: Serialize + ?Sized>(self, body: &T) -> Result<Vec<u8>> {
        match self {
            Self::Json | Self::Wildcard => Ok(serde_json::to_vec(body).map_err(InfraError::from)?),
            Self::FormUrlEncoded => encode_form(&to_value(body)?),
            _ => match to_value(body)? {
                Value::String(text) => Ok(text.into_bytes()),
                Value::Null => Ok(Vec::new()),
                other => Err(AnypointError::InvalidInput(format!(
                    "{self} body must be a string, got {}",
                    kind(&other)
                ))),
            },
        }
    }

    /// `true` when request bodies of this type are readable text.
    pub fn is_textual(self) -> bool {
        !matches!(self, Self::OctetStream | Self::Pdf)
    }
}

fn to_value<T: Serialize + ?Sized>(body: &T) -> Result<Value> {
    Ok(serde_json::to_value(body).map_err(InfraError::from)?)
}

fn encode_form(value: &Value) -> Result<Vec<u8>> {
    let Value::Object(fields) = value else {
        return Err(AnypointError::InvalidInput(format!(
            "form body must be an object, got {}",
            kind(value)
        )));
    };

    let mut form = url::form_urlencoded::Serializer::new(String::new());
    for (key, field) in fields {
        match field {
            Value::Null => {}
            Value::String(text) => {
                form.append_pair(key, text);
            }
            Value::Bool(_) | Value::Number(_) => {
                form.append_pair(key, &field.to_string());
            }
            Value::Array(_) | Value::Object(_) => {
                return Err(AnypointError::InvalidInput(format!(
                    "form field '{key}' must be a scalar, got {}",
                    kind(field)
                )))
            }
        }
    }
    Ok(form.finish().into_bytes())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
