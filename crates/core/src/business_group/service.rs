//! Business group service - core business logic

use std::sync::Arc;

use anypoint_domain::{AnypointError, BusinessGroup, Result};
use tracing::{debug, info, instrument};

use super::hierarchy;
use super::path::BusinessGroupPath;
use super::{BusinessGroupSpec, UpsertAction, UpsertOutcome};
use crate::organization::ports::AccessManagementPort;
use crate::user_lookup::find_user_by_username;

/// Create, read and delete business groups of one authenticated session
pub struct BusinessGroupService {
    port: Arc<dyn AccessManagementPort>,
    operator: String,
}

impl BusinessGroupService {
    /// `operator` is the username the session logged in with; it owns new
    /// groups unless `BusinessGroupSpec::owner_username` names another one.
    pub fn new(port: Arc<dyn AccessManagementPort>, operator: impl Into<String>) -> Self {
        Self { port, operator: operator.into() }
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// Fetch the full tree of the operator's root organization.
    pub async fn root_hierarchy(&self) -> Result<BusinessGroup> {
        let root_id = self.port.current_organization_id().await?;
        self.port.hierarchy(&root_id).await
    }

    /// Create the business group, or update it in place when a group with the
    /// same name already exists under the parent.
    #[instrument(skip(self, spec), fields(name = %spec.name))]
    pub async fn create(&self, spec: &BusinessGroupSpec) -> Result<UpsertOutcome> {
        if spec.name.is_empty() {
            return Err(AnypointError::InvalidInput("business group name is empty".into()));
        }

        let root = self.root_hierarchy().await?;
        let parent = resolve_parent(&root, spec.parent_path.as_ref())
            .map_err(|err| err.context(format!("creating business group '{}'", spec.name)))?;

        let owner_username = spec.owner_username.as_deref().unwrap_or(&self.operator);
        let owner = find_user_by_username(self.port.as_ref(), &parent.id, owner_username)
            .await
            .map_err(|err| err.context(format!("resolving owner of business group '{}'", spec.name)))?;
        debug!(owner = %owner.username, owner_id = %owner.id, parent_id = %parent.id, "resolved owner");

        let payload = BusinessGroup {
            name: spec.name.clone(),
            owner_id: owner.id,
            parent_organization_id: parent.id.clone(),
            entitlements: spec.entitlements.clone(),
            ..BusinessGroup::default()
        };

        let (group, action) = match hierarchy::find_child(parent, &spec.name) {
            Some(existing) => {
                let group = self.port.update_organization(&existing.id, &payload).await?;
                (group, UpsertAction::Updated)
            }
            None => {
                let group = self.port.create_organization(&payload).await?;
                (group, UpsertAction::Created)
            }
        };

        info!(id = %group.id, parent_id = %parent.id, %action, "business group written");
        Ok(UpsertOutcome { group, action })
    }

    /// Fetch the business group named `name` under `parent_path`.
    #[instrument(skip(self, parent_path))]
    pub async fn read(
        &self,
        name: &str,
        parent_path: Option<&BusinessGroupPath>,
    ) -> Result<BusinessGroup> {
        let root = self.root_hierarchy().await?;
        let parent = resolve_parent(&root, parent_path)?;

        let Some(child) = hierarchy::find_child(parent, name) else {
            return Err(AnypointError::NotFound(format!(
                "business group '{name}' does not exist under '{}'",
                parent.name
            )));
        };

        self.port.organization(&child.id).await
    }

    pub async fn read_by_id(&self, id: &str) -> Result<BusinessGroup> {
        self.port.organization(id).await
    }

    /// Path of the business group `id` from the operator's root organization.
    ///
    /// # Errors
    /// `NotFound` when the id is not part of the operator's hierarchy.
    #[instrument(skip(self))]
    pub async fn locate(&self, id: &str) -> Result<BusinessGroupPath> {
        let root = self.root_hierarchy().await?;
        hierarchy::path_to(&root, id).ok_or_else(|| {
            AnypointError::NotFound(format!(
                "business group {id} is not part of the hierarchy of '{}'",
                root.name
            ))
        })
    }

    /// `false` when the id no longer resolves; other failures propagate.
    pub async fn exists(&self, id: &str) -> Result<bool> {
        match self.port.organization(id).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Delete the business group with the given id.
    ///
    /// The group is fetched first so a stale id surfaces as `NotFound`.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Option<&str>) -> Result<()> {
        let id = match id {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Err(AnypointError::InvalidInput(
                    "resource id not set: cannot delete business group".into(),
                ))
            }
        };

        let group = self.port.organization(id).await?;
        self.port.delete_organization(id).await?;

        info!(id, name = %group.name, "business group deleted");
        Ok(())
    }

    /// In-place update is not offered; re-running create performs an upsert.
    pub async fn update(&self, _spec: &BusinessGroupSpec) -> Result<UpsertOutcome> {
        Err(AnypointError::Unsupported("update of business group is not implemented".into()))
    }
}

fn resolve_parent<'a>(
    root: &'a BusinessGroup,
    parent_path: Option<&BusinessGroupPath>,
) -> Result<&'a BusinessGroup> {
    match parent_path {
        Some(path) => hierarchy::resolve(root, path),
        None => Ok(root),
    }
}
