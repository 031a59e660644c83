//! Business group (organization) types
//!
//! A business group is one node of the organization hierarchy. The hierarchy
//! endpoint returns the root node with every descendant nested under
//! `subOrganizations`, so a single `BusinessGroup` value is also the whole
//! tree snapshot.

use serde::{Deserialize, Deserializer, Serialize};

/// Organization node as returned by the Access Management API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessGroup {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub owner_id: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub parent_organization_id: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Entitlements::is_empty")]
    pub entitlements: Entitlements,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub sub_organizations: Vec<BusinessGroup>,

    // Read-only metadata, kept so a fetched group can be written back as is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "idprovider_id", default, skip_serializing_if = "Option::is_none")]
    pub idprovider_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_federated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_master: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub parent_organization_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_timeout: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub tenant_organization_ids: Vec<String>,
}

impl BusinessGroup {
    /// Create a bare node with an id and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), ..Self::default() }
    }

    /// Builder-style helper used when assembling hierarchy snapshots.
    #[must_use]
    pub fn with_children(mut self, children: Vec<BusinessGroup>) -> Self {
        self.sub_organizations = children;
        self
    }

    /// Direct children of this node.
    pub fn children(&self) -> &[BusinessGroup] {
        &self.sub_organizations
    }

    /// Payload for create/update calls: the writable fields only.
    pub fn to_write_payload(&self) -> Self {
        Self {
            id: String::new(),
            name: self.name.clone(),
            owner_id: self.owner_id.clone(),
            parent_organization_id: self.parent_organization_id.clone(),
            entitlements: self.entitlements.clone(),
            ..Self::default()
        }
    }
}

/// The API sends `null` for empty collections and unset ids on some nodes.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Quotas and capability flags attached to a business group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entitlements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_sub_orgs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_deployment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_environments: Option<bool>,
    #[serde(rename = "vCoresProduction", default, skip_serializing_if = "Option::is_none")]
    pub vcores_production: Option<EntitlementStatus>,
    #[serde(rename = "vCoresSandbox", default, skip_serializing_if = "Option::is_none")]
    pub vcores_sandbox: Option<EntitlementStatus>,
    #[serde(rename = "vCoresDesign", default, skip_serializing_if = "Option::is_none")]
    pub vcores_design: Option<EntitlementStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_ips: Option<EntitlementStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpcs: Option<EntitlementStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancer: Option<EntitlementStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpns: Option<EntitlementStatus>,
}

impl Entitlements {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Numeric quota; the API reports more keys (e.g. `reassigned`) which are
/// ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitlementStatus {
    pub assigned: f64,
}

impl EntitlementStatus {
    pub fn assigned(value: f64) -> Self {
        Self { assigned: value }
    }
}
