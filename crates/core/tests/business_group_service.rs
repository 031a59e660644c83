//! Business group service behaviour against an in-memory Access Management
//! port.

mod support;

use std::sync::Arc;

use anypoint_core::{
    find_user_by_username, BusinessGroupPath, BusinessGroupService, BusinessGroupSpec,
    UpsertAction,
};
use anypoint_domain::{AnypointError, BusinessGroup, EntitlementStatus, Entitlements};
use support::access_management::{user, MockAccessManagement};

const OPERATOR: &str = "ops";

fn tree() -> BusinessGroup {
    BusinessGroup::new("1", "RootOrg").with_children(vec![
        BusinessGroup::new("2", "Sub Org 1").with_children(vec![BusinessGroup::new("7", "Team A")]),
        BusinessGroup::new("3", "Sub Org 2"),
    ])
}

fn service(mock: &Arc<MockAccessManagement>) -> BusinessGroupService {
    BusinessGroupService::new(mock.clone(), OPERATOR)
}

fn path(raw: &str) -> BusinessGroupPath {
    raw.parse().unwrap()
}

#[tokio::test]
async fn create_posts_new_group_under_resolved_parent() {
    let mock = Arc::new(MockAccessManagement::new(tree()).with_member("u-ops", OPERATOR));
    let spec = BusinessGroupSpec::new("Team B")
        .with_parent(path("RootOrg/Sub Org 1"))
        .with_entitlements(Entitlements {
            create_environments: Some(true),
            vcores_sandbox: Some(EntitlementStatus::assigned(0.5)),
            ..Entitlements::default()
        });

    let outcome = service(&mock).create(&spec).await.unwrap();

    assert_eq!(outcome.action, UpsertAction::Created);
    assert_eq!(outcome.group.parent_organization_id, "2");
    assert_eq!(outcome.group.owner_id, "u-ops");
    assert_eq!(outcome.group.entitlements.create_environments, Some(true));
    assert!(!outcome.id().is_empty());
    assert_eq!(mock.writes(), vec!["POST Team B"]);
}

#[tokio::test]
async fn create_with_existing_name_updates_instead_of_posting() {
    let mock = Arc::new(MockAccessManagement::new(tree()).with_member("u-ops", OPERATOR));
    let spec = BusinessGroupSpec::new("Team A").with_parent(path("RootOrg/Sub Org 1"));

    let outcome = service(&mock).create(&spec).await.unwrap();

    assert_eq!(outcome.action, UpsertAction::Updated);
    assert_eq!(outcome.id(), "7");
    assert_eq!(mock.writes(), vec!["PUT 7"]);
}

#[tokio::test]
async fn same_name_under_another_parent_is_a_new_group() {
    let mock = Arc::new(MockAccessManagement::new(tree()).with_member("u-ops", OPERATOR));
    let spec = BusinessGroupSpec::new("Team A").with_parent(path("RootOrg/Sub Org 2"));

    let outcome = service(&mock).create(&spec).await.unwrap();

    assert_eq!(outcome.action, UpsertAction::Created);
    assert_eq!(outcome.group.parent_organization_id, "3");
}

#[tokio::test]
async fn create_without_parent_path_lands_under_root() {
    let mock = Arc::new(MockAccessManagement::new(tree()).with_member("u-ops", OPERATOR));

    let outcome = service(&mock).create(&BusinessGroupSpec::new("Platform")).await.unwrap();

    assert_eq!(outcome.group.parent_organization_id, "1");
    assert!(mock.tree().children().iter().any(|child| child.name == "Platform"));
}

#[tokio::test]
async fn create_with_missing_parent_fails_before_writing() {
    let mock = Arc::new(MockAccessManagement::new(tree()).with_member("u-ops", OPERATOR));
    let spec = BusinessGroupSpec::new("Team B").with_parent(path("RootOrg/Missing"));

    let err = service(&mock).create(&spec).await.unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("Missing"));
    assert!(mock.writes().is_empty());
}

#[tokio::test]
async fn create_uses_explicit_owner() {
    let mock = Arc::new(
        MockAccessManagement::new(tree())
            .with_member("u-ops", OPERATOR)
            .with_member("u-jane", "jane"),
    );
    let spec = BusinessGroupSpec::new("Team B").with_owner("jane");

    let outcome = service(&mock).create(&spec).await.unwrap();

    assert_eq!(outcome.group.owner_id, "u-jane");
}

#[tokio::test]
async fn unknown_owner_is_not_found() {
    let mock = Arc::new(MockAccessManagement::new(tree()).with_member("u-ops", OPERATOR));
    let spec = BusinessGroupSpec::new("Team B").with_owner("ghost");

    let err = service(&mock).create(&spec).await.unwrap_err();

    assert!(err.is_not_found());
    assert!(mock.writes().is_empty());
}

#[tokio::test]
async fn ambiguous_owner_is_a_validation_error() {
    let mock = Arc::new(
        MockAccessManagement::new(tree())
            .with_member("u-1", "jane")
            .with_member("u-2", "jane"),
    );
    let spec = BusinessGroupSpec::new("Team B").with_owner("jane");

    let err = service(&mock).create(&spec).await.unwrap_err();

    assert!(matches!(err, AnypointError::Validation(_)), "got {err:?}");
    assert!(mock.writes().is_empty());
}

#[tokio::test]
async fn create_rejects_empty_name() {
    let mock = Arc::new(MockAccessManagement::new(tree()));

    let err = service(&mock).create(&BusinessGroupSpec::new("")).await.unwrap_err();

    assert!(matches!(err, AnypointError::InvalidInput(_)));
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn user_lookup_keeps_exact_matches_across_pages() {
    // 150 fuzzy hits for "jane" push the exact match onto the second page
    let mut members: Vec<_> = (0..149).map(|n| user(&format!("u-{n}"), &format!("jane{n}"))).collect();
    members.push(user("u-jane", "jane"));
    let mock = MockAccessManagement::new(tree()).with_members(members);

    let found = find_user_by_username(&mock, "1", "jane").await.unwrap();

    assert_eq!(found.id, "u-jane");
    assert_eq!(mock.calls(), vec!["GET members 1 offset=0", "GET members 1 offset=100"]);
}

#[tokio::test]
async fn read_resolves_parent_and_fetches_by_id() {
    let mock = Arc::new(MockAccessManagement::new(tree()));

    let group = service(&mock).read("Team A", Some(&path("RootOrg/Sub Org 1"))).await.unwrap();

    assert_eq!(group.id, "7");
    assert_eq!(mock.calls().last().map(String::as_str), Some("GET 7"));
}

#[tokio::test]
async fn read_of_unknown_name_is_not_found() {
    let mock = Arc::new(MockAccessManagement::new(tree()));

    let err = service(&mock).read("Team Z", Some(&path("RootOrg/Sub Org 1"))).await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn locate_returns_path_from_the_root() {
    let mock = Arc::new(MockAccessManagement::new(tree()));
    let service = service(&mock);

    let located = service.locate("7").await.unwrap();
    assert_eq!(located.to_string(), "RootOrg/Sub Org 1/Team A");
    assert_eq!(located.parent().unwrap().to_string(), "RootOrg/Sub Org 1");

    let err = service.locate("404").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(mock.writes().is_empty());
}

#[tokio::test]
async fn exists_maps_not_found_to_false() {
    let mock = Arc::new(MockAccessManagement::new(tree()));
    let service = service(&mock);

    assert!(service.exists("7").await.unwrap());
    assert!(!service.exists("404").await.unwrap());
}

#[tokio::test]
async fn exists_propagates_other_failures() {
    let mock = Arc::new(
        MockAccessManagement::new(tree())
            .failing_organization_fetch(AnypointError::Remote { status: 500, detail: "boom".into() }),
    );

    let err = service(&mock).exists("7").await.unwrap_err();

    assert!(matches!(err, AnypointError::Remote { status: 500, .. }));
}

#[tokio::test]
async fn delete_without_id_makes_no_calls() {
    let mock = Arc::new(MockAccessManagement::new(tree()));
    let service = service(&mock);

    for id in [None, Some("")] {
        let err = service.delete(id).await.unwrap_err();
        match err {
            AnypointError::InvalidInput(msg) => assert!(msg.contains("id not set")),
            other => panic!("expected invalid input, got {other:?}"),
        }
    }
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn delete_fetches_then_deletes() {
    let mock = Arc::new(MockAccessManagement::new(tree()));

    service(&mock).delete(Some("7")).await.unwrap();

    assert_eq!(mock.calls(), vec!["GET 7", "DELETE 7"]);
    assert!(mock.tree().children()[0].children().is_empty());
}

#[tokio::test]
async fn delete_of_stale_id_surfaces_not_found() {
    let mock = Arc::new(MockAccessManagement::new(tree()));

    let err = service(&mock).delete(Some("404")).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(mock.calls(), vec!["GET 404"]);
}

#[tokio::test]
async fn update_is_unsupported() {
    let mock = Arc::new(MockAccessManagement::new(tree()));

    let err = service(&mock).update(&BusinessGroupSpec::new("Team A")).await.unwrap_err();

    assert!(matches!(err, AnypointError::Unsupported(_)));
    assert!(mock.calls().is_empty());
}
