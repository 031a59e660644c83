//! # Anypoint Domain
//!
//! Domain types and models for the Anypoint business-group provider.
//!
//! This crate contains:
//! - Organization data types (BusinessGroup, Entitlements, User)
//! - Domain error types and Result definitions
//! - Provider configuration structures
//! - API constants (endpoint paths, header names, defaults)
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
