//! Access Management endpoint paths

use anypoint_domain::constants::ORGANIZATIONS_PATH;

/// `POST` target for new business groups
pub fn organizations() -> String {
    ORGANIZATIONS_PATH.to_string()
}

pub fn organization(id: &str) -> String {
    format!("{ORGANIZATIONS_PATH}/{id}")
}

pub fn hierarchy(org_id: &str) -> String {
    format!("{ORGANIZATIONS_PATH}/{org_id}/hierarchy")
}

pub fn members(org_id: &str) -> String {
    format!("{ORGANIZATIONS_PATH}/{org_id}/members")
}
