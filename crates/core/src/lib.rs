//! # Anypoint Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Business group path parsing and hierarchy resolution
//! - Port interface (trait) for the Access Management API
//! - The business group service (create/read/delete/exists) and owner lookup
//!
//! ## Architecture Principles
//! - Only depends on `anypoint-domain`
//! - No HTTP code; the remote API is reached through [`AccessManagementPort`]
//! - Resolution works over immutable hierarchy snapshots

pub mod business_group;
pub mod organization;
pub mod user_lookup;

pub use business_group::hierarchy;
pub use business_group::path::{self, BusinessGroupPath};
pub use business_group::{BusinessGroupService, BusinessGroupSpec, UpsertAction, UpsertOutcome};
pub use organization::ports::AccessManagementPort;
pub use user_lookup::find_user_by_username;
