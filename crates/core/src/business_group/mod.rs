//! Business group lifecycle
//!
//! Paths and hierarchy lookups are pure functions over a fetched snapshot;
//! [`BusinessGroupService`] combines them with the Access Management port to
//! implement create, read and delete.

pub mod hierarchy;
pub mod path;
pub mod service;

use anypoint_domain::{impl_domain_str_conversions, BusinessGroup, Entitlements};

pub use path::BusinessGroupPath;
pub use service::BusinessGroupService;

/// Desired state of a business group
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessGroupSpec {
    pub name: String,
    /// Path of the parent group; `None` means directly under the root
    /// organization.
    pub parent_path: Option<BusinessGroupPath>,
    /// Owner username; `None` means the logged-in operator.
    pub owner_username: Option<String>,
    pub entitlements: Entitlements,
}

impl BusinessGroupSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_path: None,
            owner_username: None,
            entitlements: Entitlements::default(),
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent_path: BusinessGroupPath) -> Self {
        self.parent_path = Some(parent_path);
        self
    }

    #[must_use]
    pub fn with_owner(mut self, owner_username: impl Into<String>) -> Self {
        self.owner_username = Some(owner_username.into());
        self
    }

    #[must_use]
    pub fn with_entitlements(mut self, entitlements: Entitlements) -> Self {
        self.entitlements = entitlements;
        self
    }
}

/// Which write a create call ended up issuing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertAction {
    Created,
    Updated,
}

impl_domain_str_conversions!(UpsertAction {
    Created => "created",
    Updated => "updated",
});

/// Result of a create call
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertOutcome {
    pub group: BusinessGroup,
    pub action: UpsertAction,
}

impl UpsertOutcome {
    pub fn id(&self) -> &str {
        &self.group.id
    }
}
