//! # Anypoint Provider
//!
//! Host-facing surface of the business group resource: the attribute
//! schema, resource state, lifecycle handlers and logging setup. The
//! `anypoint-bg` binary drives it from the command line.

pub mod logging;
pub mod provider;
pub mod resource;
pub mod schema;

pub use logging::{error_label, exit_code, init_tracing, LogFormat};
pub use provider::{Provider, RESOURCE_TYPE};
pub use resource::ResourceData;
pub use schema::{schema, FieldKind, FieldSchema};
