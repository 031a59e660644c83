//! In-memory mock of `AccessManagementPort`
//!
//! Holds a mutable organization tree and a flat member list, and records
//! every call as `"VERB target"` so tests can assert on the exact traffic.

use std::sync::Mutex;

use anypoint_core::AccessManagementPort;
use anypoint_domain::{AnypointError, BusinessGroup, MemberQuery, Result, User, UserPage};
use async_trait::async_trait;

pub struct MockAccessManagement {
    tree: Mutex<BusinessGroup>,
    members: Vec<User>,
    calls: Mutex<Vec<String>>,
    next_id: Mutex<u32>,
    organization_failure: Option<AnypointError>,
}

impl MockAccessManagement {
    pub fn new(tree: BusinessGroup) -> Self {
        Self {
            tree: Mutex::new(tree),
            members: Vec::new(),
            calls: Mutex::new(Vec::new()),
            next_id: Mutex::new(100),
            organization_failure: None,
        }
    }

    pub fn with_member(mut self, id: &str, username: &str) -> Self {
        self.members.push(user(id, username));
        self
    }

    pub fn with_members(mut self, members: impl IntoIterator<Item = User>) -> Self {
        self.members.extend(members);
        self
    }

    /// Make every single-organization fetch fail with `err`.
    pub fn failing_organization_fetch(mut self, err: AnypointError) -> Self {
        self.organization_failure = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| !call.starts_with("GET"))
            .collect()
    }

    pub fn tree(&self) -> BusinessGroup {
        self.tree.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

pub fn user(id: &str, username: &str) -> User {
    User { id: id.into(), username: username.into(), ..User::default() }
}

fn find_mut<'a>(node: &'a mut BusinessGroup, id: &str) -> Option<&'a mut BusinessGroup> {
    if node.id == id {
        return Some(node);
    }
    node.sub_organizations.iter_mut().find_map(|child| find_mut(child, id))
}

fn find<'a>(node: &'a BusinessGroup, id: &str) -> Option<&'a BusinessGroup> {
    if node.id == id {
        return Some(node);
    }
    node.sub_organizations.iter().find_map(|child| find(child, id))
}

fn remove(node: &mut BusinessGroup, id: &str) -> bool {
    let before = node.sub_organizations.len();
    node.sub_organizations.retain(|child| child.id != id);
    before != node.sub_organizations.len()
        || node.sub_organizations.iter_mut().any(|child| remove(child, id))
}

fn not_found(id: &str) -> AnypointError {
    AnypointError::NotFound(format!("/accounts/api/organizations/{id}"))
}

#[async_trait]
impl AccessManagementPort for MockAccessManagement {
    async fn current_organization_id(&self) -> Result<String> {
        self.record("GET me");
        Ok(self.tree.lock().unwrap().id.clone())
    }

    async fn hierarchy(&self, org_id: &str) -> Result<BusinessGroup> {
        self.record(format!("GET hierarchy {org_id}"));
        let tree = self.tree.lock().unwrap();
        find(&tree, org_id).cloned().ok_or_else(|| not_found(org_id))
    }

    async fn organization(&self, id: &str) -> Result<BusinessGroup> {
        self.record(format!("GET {id}"));
        if let Some(err) = &self.organization_failure {
            return Err(err.clone());
        }
        let tree = self.tree.lock().unwrap();
        find(&tree, id)
            .map(|group| BusinessGroup { sub_organizations: Vec::new(), ..group.clone() })
            .ok_or_else(|| not_found(id))
    }

    async fn create_organization(&self, group: &BusinessGroup) -> Result<BusinessGroup> {
        self.record(format!("POST {}", group.name));
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            next.to_string()
        };

        let mut created = group.clone();
        created.id = id;

        let mut tree = self.tree.lock().unwrap();
        let parent = find_mut(&mut tree, &group.parent_organization_id)
            .ok_or_else(|| not_found(&group.parent_organization_id))?;
        parent.sub_organizations.push(created.clone());
        Ok(created)
    }

    async fn update_organization(&self, id: &str, group: &BusinessGroup) -> Result<BusinessGroup> {
        self.record(format!("PUT {id}"));
        let mut tree = self.tree.lock().unwrap();
        let node = find_mut(&mut tree, id).ok_or_else(|| not_found(id))?;
        node.name = group.name.clone();
        node.owner_id = group.owner_id.clone();
        node.entitlements = group.entitlements.clone();
        Ok(BusinessGroup { sub_organizations: Vec::new(), ..node.clone() })
    }

    async fn delete_organization(&self, id: &str) -> Result<()> {
        self.record(format!("DELETE {id}"));
        let mut tree = self.tree.lock().unwrap();
        if remove(&mut tree, id) {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    async fn search_members(&self, org_id: &str, query: &MemberQuery) -> Result<UserPage> {
        self.record(format!("GET members {org_id} offset={}", query.offset));
        // fuzzy, like the real endpoint
        let hits: Vec<User> = self
            .members
            .iter()
            .filter(|member| member.username.contains(&query.search))
            .cloned()
            .collect();

        let data = hits
            .iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .cloned()
            .collect();
        Ok(UserPage { total: hits.len() as u64, data })
    }
}
