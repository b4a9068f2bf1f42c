use group_lookup_api::group_lookup::domain::{
    model::{
        enums::group_lookup_domain_error::GroupLookupDomainError,
        queries::lookup_group_memberships_query::LookupGroupMembershipsQuery,
    },
    services::group_membership_lookup_query_service::GroupMembershipLookupQueryService,
};

use crate::support::{create_harness, lookup_query, membership_with_display_name};

#[tokio::test]
async fn handle_lookup_returns_memberships_in_upstream_order() {
    let harness = create_harness(
        false,
        false,
        false,
        vec![
            membership_with_display_name("Engineering"),
            membership_with_display_name("AllStaff"),
        ],
    );

    let result = harness.service.handle_lookup(lookup_query()).await;

    let memberships = result.expect("lookup should succeed");
    let names: Vec<_> = memberships
        .iter()
        .map(|membership| membership.display_name())
        .collect();
    assert_eq!(names, vec![Some("Engineering"), Some("AllStaff")]);
    assert_eq!(harness.directory_facade.stats(), (1, 1, 1));
}

#[tokio::test]
async fn handle_lookup_returns_empty_when_user_belongs_to_no_groups() {
    let harness = create_harness(false, false, false, vec![]);

    let result = harness.service.handle_lookup(lookup_query()).await;

    assert!(result.expect("lookup should succeed").is_empty());
    assert_eq!(harness.directory_facade.stats(), (1, 1, 1));
}

#[tokio::test]
async fn handle_lookup_stops_after_a_token_acquisition_failure() {
    let harness = create_harness(true, false, false, vec![]);

    let result = harness.service.handle_lookup(lookup_query()).await;

    let error = result.expect_err("lookup should fail");
    assert_eq!(error.to_string(), "Failed to acquire token");
    assert!(matches!(
        error,
        GroupLookupDomainError::TokenAcquisitionFailed(_)
    ));
    assert_eq!(harness.directory_facade.stats(), (1, 0, 0));
}

#[tokio::test]
async fn handle_lookup_reports_an_unresolved_user_with_the_submitted_upn() {
    let harness = create_harness(false, true, false, vec![]);

    let result = harness.service.handle_lookup(lookup_query()).await;

    let error = result.expect_err("lookup should fail");
    assert_eq!(error.to_string(), "User not found: jdoe@example.com");
    assert!(matches!(
        error,
        GroupLookupDomainError::UserNotFound { upn, .. } if upn == "jdoe@example.com"
    ));
    assert_eq!(harness.directory_facade.stats(), (1, 1, 0));
}

#[tokio::test]
async fn handle_lookup_reports_a_failed_membership_fetch() {
    let harness = create_harness(false, false, true, vec![]);

    let result = harness.service.handle_lookup(lookup_query()).await;

    let error = result.expect_err("lookup should fail");
    assert_eq!(error.to_string(), "Failed to fetch group memberships");
    assert!(matches!(
        error,
        GroupLookupDomainError::GroupMembershipFetchFailed(_)
    ));
    assert_eq!(harness.directory_facade.stats(), (1, 1, 1));
}

#[test]
fn lookup_query_rejects_blank_user_principal_names() {
    let result = LookupGroupMembershipsQuery::new("   ".to_string());

    assert!(matches!(
        result,
        Err(GroupLookupDomainError::InvalidUserPrincipalName)
    ));
}

#[test]
fn lookup_query_trims_surrounding_whitespace() {
    let query = LookupGroupMembershipsQuery::new("  jdoe@example.com  ".to_string())
        .expect("valid query");

    assert_eq!(query.user_principal_name().value(), "jdoe@example.com");
}
