//! Owner lookup by username
//!
//! The members endpoint only offers a fuzzy `search` parameter, so every page
//! is fetched and filtered down to exact username matches.

use anypoint_domain::{AnypointError, MemberQuery, Result, User};
use tracing::debug;

use crate::organization::ports::AccessManagementPort;

/// Find the single member of `org_id` whose username is exactly `username`.
///
/// # Errors
/// `NotFound` when no member matches, `Validation` when more than one does,
/// and whatever the port reports for failed page fetches.
pub async fn find_user_by_username(
    port: &dyn AccessManagementPort,
    org_id: &str,
    username: &str,
) -> Result<User> {
    let mut query = MemberQuery::search(username);
    let mut matches: Vec<User> = Vec::new();

    loop {
        let page = port.search_members(org_id, &query).await?;
        let fetched = page.data.len();
        debug!(org_id, offset = query.offset, fetched, total = page.total, "member search page");

        matches.extend(page.data.into_iter().filter(|user| user.username == username));

        let seen = u64::from(query.offset) + fetched as u64;
        if fetched < query.limit as usize || seen >= page.total {
            break;
        }
        query = query.next_page();
    }

    match matches.len() {
        0 => Err(AnypointError::NotFound(format!(
            "user '{username}' is not a member of organization {org_id}"
        ))),
        1 => Ok(matches.remove(0)),
        n => Err(AnypointError::Validation(format!(
            "username '{username}' matches {n} members of organization {org_id}"
        ))),
    }
}
