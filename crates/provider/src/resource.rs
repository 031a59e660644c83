//! Resource state exchanged with the host
//!
//! A [`ResourceData`] is the host's view of one business group: the id it
//! stores after create, plus the schema attributes.

use anypoint_core::{BusinessGroupPath, BusinessGroupSpec};
use anypoint_domain::{BusinessGroup, EntitlementStatus, Entitlements, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{
    self, CREATE_ENVIRONMENTS, CREATE_SUB_ORGS, GLOBAL_DEPLOYMENT, LOAD_BALANCER, NAME,
    OWNER_USERNAME, PARENT_PATH, STATIC_IPS, VCORES_DESIGN, VCORES_PRODUCTION, VCORES_SANDBOX,
    VPCS, VPNS,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default)]
    attributes: Map<String, Value>,
}

impl ResourceData {
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self { id: None, attributes }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    /// Stored id; an empty id counts as unset.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn clear_id(&mut self) {
        self.id = None;
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str).filter(|value| !value.is_empty())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.attributes.get(key).and_then(Value::as_bool)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.attributes.get(key).and_then(Value::as_f64)
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.attributes.insert(key.to_string(), value.into());
    }

    /// Parent path attribute, parsed.
    pub fn parent_path(&self) -> Result<Option<BusinessGroupPath>> {
        self.get_str(PARENT_PATH).map(BusinessGroupPath::parse).transpose()
    }

    /// Validate the attributes and build the desired state.
    pub fn to_spec(&self) -> Result<BusinessGroupSpec> {
        schema::validate(&self.attributes)?;

        let mut spec = BusinessGroupSpec::new(self.get_str(NAME).unwrap_or_default())
            .with_entitlements(self.entitlements());
        if let Some(parent) = self.parent_path()? {
            spec = spec.with_parent(parent);
        }
        if let Some(owner) = self.get_str(OWNER_USERNAME) {
            spec = spec.with_owner(owner);
        }
        Ok(spec)
    }

    fn entitlements(&self) -> Entitlements {
        let quota = |key: &str| self.get_f64(key).map(EntitlementStatus::assigned);
        Entitlements {
            create_sub_orgs: self.get_bool(CREATE_SUB_ORGS),
            create_environments: self.get_bool(CREATE_ENVIRONMENTS),
            global_deployment: self.get_bool(GLOBAL_DEPLOYMENT),
            vcores_production: quota(VCORES_PRODUCTION),
            vcores_sandbox: quota(VCORES_SANDBOX),
            vcores_design: quota(VCORES_DESIGN),
            static_ips: quota(STATIC_IPS),
            vpcs: quota(VPCS),
            load_balancer: quota(LOAD_BALANCER),
            vpns: quota(VPNS),
        }
    }

    /// Refresh id, name and entitlements from the remote state.
    ///
    /// `parent_path` and `owner_username` are inputs only and stay as
    /// configured.
    pub fn apply_group(&mut self, group: &BusinessGroup) {
        if !group.id.is_empty() {
            self.set_id(group.id.clone());
        }
        if !group.name.is_empty() {
            self.set(NAME, group.name.clone());
        }

        let ents = &group.entitlements;
        let flags = [
            (CREATE_SUB_ORGS, ents.create_sub_orgs),
            (CREATE_ENVIRONMENTS, ents.create_environments),
            (GLOBAL_DEPLOYMENT, ents.global_deployment),
        ];
        for (key, flag) in flags {
            if let Some(flag) = flag {
                self.set(key, flag);
            }
        }

        let quotas = [
            (VCORES_PRODUCTION, ents.vcores_production),
            (VCORES_SANDBOX, ents.vcores_sandbox),
            (VCORES_DESIGN, ents.vcores_design),
            (STATIC_IPS, ents.static_ips),
            (VPCS, ents.vpcs),
            (LOAD_BALANCER, ents.load_balancer),
            (VPNS, ents.vpns),
        ];
        for (key, quota) in quotas {
            if let Some(quota) = quota {
                self.set(key, quota.assigned);
            }
        }
    }
}
