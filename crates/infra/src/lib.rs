//! # Anypoint Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP transport and the typed REST client
//! - Login session handling
//! - The Access Management adapter implementing `AccessManagementPort`
//! - Configuration loading (environment and files)
//!
//! ## Architecture
//! - Implements traits defined in `anypoint-core`
//! - Depends on `anypoint-domain` and `anypoint-core`
//! - Contains all "impure" code (network and file I/O)

pub mod access_management;
pub mod auth;
pub mod config;
pub mod errors;
pub mod http;
pub mod rest;

// Re-export commonly used items
pub use access_management::AccessManagementClient;
pub use auth::Session;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use rest::{ContentType, RequestHeaders, RestClient};
