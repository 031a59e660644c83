use anypoint_core::AccessManagementPort;
use anypoint_domain::constants::ME_PATH;
use anypoint_domain::{BusinessGroup, Me, MemberQuery, Result, UserPage};
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::endpoints;
use crate::auth::Session;
use crate::rest::RestClient;

/// Access Management calls over an authenticated client
#[derive(Debug, Clone)]
pub struct AccessManagementClient {
    client: RestClient,
}

impl AccessManagementClient {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    pub fn from_session(session: &Session) -> Self {
        Self::new(session.client().clone())
    }
}

#[async_trait]
impl AccessManagementPort for AccessManagementClient {
    async fn current_organization_id(&self) -> Result<String> {
        let me: Me = self.client.get(ME_PATH).await?;
        debug!(user = %me.user.username, org_id = %me.user.organization.id, "resolved current user");
        Ok(me.user.organization.id)
    }

    #[instrument(skip(self))]
    async fn hierarchy(&self, org_id: &str) -> Result<BusinessGroup> {
        self.client
            .get(&endpoints::hierarchy(org_id))
            .await
            .map_err(|err| err.context(format!("fetching hierarchy of organization {org_id}")))
    }

    async fn organization(&self, id: &str) -> Result<BusinessGroup> {
        self.client.get(&endpoints::organization(id)).await
    }

    #[instrument(skip(self, group), fields(name = %group.name, parent_id = %group.parent_organization_id))]
    async fn create_organization(&self, group: &BusinessGroup) -> Result<BusinessGroup> {
        self.client
            .post(&endpoints::organizations(), &group.to_write_payload())
            .await
            .map_err(|err| err.context(format!("creating business group '{}'", group.name)))
    }

    #[instrument(skip(self, group), fields(name = %group.name))]
    async fn update_organization(&self, id: &str, group: &BusinessGroup) -> Result<BusinessGroup> {
        self.client
            .put(&endpoints::organization(id), &group.to_write_payload())
            .await
            .map_err(|err| err.context(format!("updating business group {id}")))
    }

    #[instrument(skip(self))]
    async fn delete_organization(&self, id: &str) -> Result<()> {
        // the body, if any, carries nothing we need
        let _: serde_json::Value = self
            .client
            .delete(&endpoints::organization(id))
            .await
            .map_err(|err| err.context(format!("deleting business group {id}")))?;
        Ok(())
    }

    async fn search_members(&self, org_id: &str, query: &MemberQuery) -> Result<UserPage> {
        self.client.get_with_params(&endpoints::members(org_id), query).await
    }
}
