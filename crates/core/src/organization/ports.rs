//! Port interfaces for the Access Management API
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use anypoint_domain::{BusinessGroup, MemberQuery, Result, UserPage};

/// Organization and member operations of an authenticated session
#[async_trait]
pub trait AccessManagementPort: Send + Sync {
    /// Id of the root organization of the logged-in user
    async fn current_organization_id(&self) -> Result<String>;

    /// Full tree rooted at `org_id`
    async fn hierarchy(&self, org_id: &str) -> Result<BusinessGroup>;

    /// Single organization by id
    async fn organization(&self, id: &str) -> Result<BusinessGroup>;

    /// Create a business group; returns the stored node
    async fn create_organization(&self, group: &BusinessGroup) -> Result<BusinessGroup>;

    /// Replace the writable fields of an existing business group
    async fn update_organization(&self, id: &str, group: &BusinessGroup) -> Result<BusinessGroup>;

    /// Delete a business group
    async fn delete_organization(&self, id: &str) -> Result<()>;

    /// One page of a member search within `org_id`
    async fn search_members(&self, org_id: &str, query: &MemberQuery) -> Result<UserPage>;
}
