//! REST plumbing for the Anypoint platform API
//!
//! - [`RestClient`]: typed verbs over a base URL
//! - [`RequestHeaders`]: bearer token, org and environment scoping
//! - [`ContentType`]: body encodings for the `*_as` verbs
//! - [`classify_status`]: HTTP status to domain error mapping

pub mod client;
pub mod content_type;
pub mod headers;
pub mod status;
mod wire;

pub use client::RestClient;
pub use content_type::ContentType;
pub use headers::RequestHeaders;
pub use status::classify_status;
