//! Domain types and models
//!
//! Wire shapes of the Access Management API. JSON is camelCase; optional
//! fields are omitted when absent so create/update bodies only carry what the
//! caller declared.

pub mod auth;
pub mod business_group;
pub mod user;

pub use auth::{AuthToken, LoginPayload, Me, MeUser, OrganizationRef};
pub use business_group::{BusinessGroup, EntitlementStatus, Entitlements};
pub use user::{MemberQuery, User, UserPage};
