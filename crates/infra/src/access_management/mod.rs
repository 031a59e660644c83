//! Access Management API adapter
//!
//! Implements [`anypoint_core::AccessManagementPort`] over an authenticated
//! [`RestClient`](crate::rest::RestClient).

pub mod client;
pub mod endpoints;

pub use client::AccessManagementClient;
