//! Organization member types
//!
//! Users are only ever looked up (by username search) to resolve the owner of
//! a business group; they are never created or modified.

use serde::{Deserialize, Serialize};

use crate::constants::MEMBER_SEARCH_PAGE_SIZE;

/// Member of an organization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(rename = "idprovider_id", default)]
    pub idprovider_id: Option<String>,
    #[serde(rename = "type", default)]
    pub user_type: Option<String>,
}

/// One page of a member search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub data: Vec<User>,
}

/// Query parameters of `GET /organizations/{orgId}/members`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberQuery {
    pub search: String,
    pub limit: u32,
    pub offset: u32,
}

impl MemberQuery {
    /// First page of a search for `term`.
    pub fn search(term: impl Into<String>) -> Self {
        Self { search: term.into(), limit: MEMBER_SEARCH_PAGE_SIZE, offset: 0 }
    }

    /// The page following this one.
    #[must_use]
    pub fn next_page(&self) -> Self {
        Self { search: self.search.clone(), limit: self.limit, offset: self.offset + self.limit }
    }
}
