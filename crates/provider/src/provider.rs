//! Lifecycle handlers of the business group resource
//!
//! [`Provider`] is built once per host session. Each handler takes the
//! host's [`ResourceData`], runs one service operation and writes the
//! remote state back into it.

use std::sync::Arc;

use anypoint_core::{AccessManagementPort, BusinessGroupService, UpsertAction};
use anypoint_domain::constants::BUSINESS_GROUP_RESOURCE;
use anypoint_domain::{AnypointError, ProviderConfig, Result};
use anypoint_infra::{AccessManagementClient, Session};
use tracing::{debug, info, instrument, warn};

use crate::resource::ResourceData;
use crate::schema::{self, FieldSchema, NAME, PARENT_PATH};

/// Type name hosts register the resource under
pub const RESOURCE_TYPE: &str = BUSINESS_GROUP_RESOURCE;

/// Configured provider: one login session and the service on top of it
pub struct Provider {
    service: BusinessGroupService,
}

impl Provider {
    /// Log in and wire the Access Management client into the service.
    ///
    /// The session's username becomes the default owner of new groups.
    #[instrument(skip(config), fields(base_url = %config.base_url, username = %config.username))]
    pub async fn configure(config: &ProviderConfig) -> Result<Self> {
        let session = Session::login(config).await?;
        let port = Arc::new(AccessManagementClient::from_session(&session));
        Ok(Self::with_port(port, session.username()))
    }

    /// Build over any port implementation.
    pub fn with_port(port: Arc<dyn AccessManagementPort>, operator: impl Into<String>) -> Self {
        Self { service: BusinessGroupService::new(port, operator) }
    }

    pub fn resource_type(&self) -> &'static str {
        RESOURCE_TYPE
    }

    pub fn schema(&self) -> &'static [FieldSchema] {
        schema::schema()
    }

    pub fn service(&self) -> &BusinessGroupService {
        &self.service
    }

    /// Create (or adopt and update) the group described by `data`.
    ///
    /// On success the id is set and remote fields are refreshed.
    #[instrument(skip(self, data), fields(name = ?data.get_str(NAME)))]
    pub async fn create(&self, data: &mut ResourceData) -> Result<UpsertAction> {
        let spec = data.to_spec()?;
        let outcome = self.service.create(&spec).await?;
        if outcome.id().is_empty() {
            return Err(AnypointError::Internal(format!(
                "business group '{}' was written but the response carried no id",
                spec.name
            )));
        }

        data.apply_group(&outcome.group);
        info!(id = %outcome.id(), action = %outcome.action, "resource created");
        Ok(outcome.action)
    }

    /// Refresh `data` from the remote state.
    ///
    /// Reads by id once one is stored, otherwise by `parent_path` and `name`.
    /// A group read by id without a `parent_path` (an import) gets one filled
    /// in from its position in the hierarchy.
    #[instrument(skip(self, data), fields(id = ?data.id()))]
    pub async fn read(&self, data: &mut ResourceData) -> Result<()> {
        let group = match data.id().map(str::to_owned) {
            Some(id) => {
                let group = self.service.read_by_id(&id).await?;
                if data.get_str(PARENT_PATH).is_none() {
                    self.fill_parent_path(data, &id).await?;
                }
                group
            }
            None => {
                let name = data.get_str(NAME).ok_or_else(|| {
                    AnypointError::InvalidInput(
                        "resource has neither an id nor a name to read by".into(),
                    )
                })?;
                let parent = data.parent_path()?;
                self.service.read(name, parent.as_ref()).await?
            }
        };

        data.apply_group(&group);
        Ok(())
    }

    async fn fill_parent_path(&self, data: &mut ResourceData, id: &str) -> Result<()> {
        match self.service.locate(id).await {
            Ok(path) => {
                if let Some(parent) = path.parent() {
                    debug!(id, parent = %parent, "derived parent path");
                    data.set(PARENT_PATH, parent.to_string());
                }
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                debug!(id, error = %err, "group is outside the operator's hierarchy");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    pub async fn update(&self, data: &mut ResourceData) -> Result<()> {
        let spec = data.to_spec()?;
        self.service.update(&spec).await.map(|_| ())
    }

    /// Delete the group and forget its id.
    #[instrument(skip(self, data), fields(id = ?data.id()))]
    pub async fn delete(&self, data: &mut ResourceData) -> Result<()> {
        self.service.delete(data.id()).await?;
        data.clear_id();
        Ok(())
    }

    /// `false` when no id is stored or the stored id no longer resolves.
    pub async fn exists(&self, data: &ResourceData) -> Result<bool> {
        let Some(id) = data.id() else {
            return Ok(false);
        };

        let exists = self.service.exists(id).await?;
        if !exists {
            warn!(id, "business group no longer exists");
        }
        Ok(exists)
    }
}
