//! Declarative schema of the business group resource
//!
//! The schema is data: hosts can list it, and [`validate`] checks a set of
//! attributes against it before any handler touches the network.

use anypoint_domain::{impl_domain_str_conversions, AnypointError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Value type of a resource attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Bool,
    Number,
}

impl_domain_str_conversions!(FieldKind {
    String => "string",
    Bool => "bool",
    Number => "number",
});

impl FieldKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Bool => value.is_boolean(),
            Self::Number => value.is_number(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub description: &'static str,
}

impl FieldSchema {
    const fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self { name, kind, required: true, description }
    }

    const fn optional(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self { name, kind, required: false, description }
    }
}

pub const NAME: &str = "name";
pub const PARENT_PATH: &str = "parent_path";
pub const OWNER_USERNAME: &str = "owner_username";
pub const CREATE_SUB_ORGS: &str = "create_sub_orgs";
pub const CREATE_ENVIRONMENTS: &str = "create_environments";
pub const GLOBAL_DEPLOYMENT: &str = "global_deployment";
pub const VCORES_PRODUCTION: &str = "vcores_production";
pub const VCORES_SANDBOX: &str = "vcores_sandbox";
pub const VCORES_DESIGN: &str = "vcores_design";
pub const STATIC_IPS: &str = "static_ips";
pub const VPCS: &str = "vpcs";
pub const LOAD_BALANCER: &str = "load_balancer";
pub const VPNS: &str = "vpns";

static FIELDS: &[FieldSchema] = &[
    FieldSchema::required(NAME, FieldKind::String, "Name of the business group"),
    FieldSchema::optional(
        PARENT_PATH,
        FieldKind::String,
        "Path of the parent group from the root organization, '/'-separated ('//' for a literal '/'); defaults to the root organization",
    ),
    FieldSchema::optional(
        OWNER_USERNAME,
        FieldKind::String,
        "Username of the owner; defaults to the configured operator",
    ),
    FieldSchema::optional(CREATE_SUB_ORGS, FieldKind::Bool, "Allow creating nested business groups"),
    FieldSchema::optional(CREATE_ENVIRONMENTS, FieldKind::Bool, "Allow creating environments"),
    FieldSchema::optional(GLOBAL_DEPLOYMENT, FieldKind::Bool, "Allow deploying to every region"),
    FieldSchema::optional(VCORES_PRODUCTION, FieldKind::Number, "Production vCores assigned"),
    FieldSchema::optional(VCORES_SANDBOX, FieldKind::Number, "Sandbox vCores assigned"),
    FieldSchema::optional(VCORES_DESIGN, FieldKind::Number, "Design vCores assigned"),
    FieldSchema::optional(STATIC_IPS, FieldKind::Number, "Static IPs assigned"),
    FieldSchema::optional(VPCS, FieldKind::Number, "VPCs assigned"),
    FieldSchema::optional(LOAD_BALANCER, FieldKind::Number, "Dedicated load balancers assigned"),
    FieldSchema::optional(VPNS, FieldKind::Number, "VPNs assigned"),
];

/// Every attribute of the business group resource
pub fn schema() -> &'static [FieldSchema] {
    FIELDS
}

pub fn field(name: &str) -> Option<&'static FieldSchema> {
    FIELDS.iter().find(|field| field.name == name)
}

/// Check attributes against the schema.
///
/// `null` counts as absent. Numbers must be finite and non-negative.
///
/// # Errors
/// `InvalidInput` naming the first offending attribute.
pub fn validate(attributes: &Map<String, Value>) -> Result<()> {
    for (name, value) in attributes {
        let Some(field) = field(name) else {
            return Err(AnypointError::InvalidInput(format!("unknown attribute '{name}'")));
        };
        if value.is_null() {
            continue;
        }
        if !field.kind.matches(value) {
            return Err(AnypointError::InvalidInput(format!(
                "attribute '{name}' must be a {}",
                field.kind
            )));
        }
        if let Some(number) = value.as_f64() {
            if !number.is_finite() || number < 0.0 {
                return Err(AnypointError::InvalidInput(format!(
                    "attribute '{name}' must be a non-negative number"
                )));
            }
        }
    }

    for field in FIELDS.iter().filter(|field| field.required) {
        let present = attributes.get(field.name).is_some_and(|value| match value {
            Value::Null => false,
            Value::String(text) => !text.trim().is_empty(),
            _ => true,
        });
        if !present {
            return Err(AnypointError::InvalidInput(format!(
                "missing required attribute '{}'",
                field.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn attrs(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn schema_lists_name_as_only_required_field() {
        let required: Vec<&str> =
            schema().iter().filter(|field| field.required).map(|field| field.name).collect();
        assert_eq!(required, vec![NAME]);
        assert_eq!(schema().len(), 13);
    }

    #[test]
    fn accepts_full_attribute_set() {
        let attributes = attrs(json!({
            "name": "Team A",
            "parent_path": "RootOrg/Sub Org 1",
            "owner_username": "jane",
            "create_sub_orgs": true,
            "vcores_sandbox": 0.5,
            "vpns": 2,
            "static_ips": null
        }));
        assert!(validate(&attributes).is_ok());
    }

    #[test]
    fn rejects_missing_or_blank_name() {
        assert!(validate(&attrs(json!({ "parent_path": "RootOrg" }))).is_err());
        assert!(validate(&attrs(json!({ "name": "  " }))).is_err());
    }

    #[test]
    fn rejects_wrong_kinds_and_unknown_attributes() {
        let err = validate(&attrs(json!({ "name": "A", "vpns": "two" }))).unwrap_err();
        assert!(err.to_string().contains("'vpns' must be a number"));

        let err = validate(&attrs(json!({ "name": "A", "colour": "blue" }))).unwrap_err();
        assert!(err.to_string().contains("unknown attribute 'colour'"));
    }

    #[test]
    fn rejects_negative_quotas() {
        assert!(validate(&attrs(json!({ "name": "A", "vcores_design": -1 }))).is_err());
    }

    #[test]
    fn field_kinds_serialize_lowercase() {
        let json = serde_json::to_value(field(VCORES_DESIGN).unwrap()).unwrap();
        assert_eq!(json["kind"], "number");
        assert_eq!(FieldKind::Bool.to_string(), "bool");
    }
}
