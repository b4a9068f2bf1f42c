use thiserror::Error;

use crate::group_lookup::interfaces::acl::directory_facade::DirectoryIntegrationError;

/// One variant per pipeline step, so the failing step stays identifiable all
/// the way to the page. Display texts are the user-facing messages verbatim.
#[derive(Debug, Error)]
pub enum GroupLookupDomainError {
    #[error("Failed to acquire token")]
    TokenAcquisitionFailed(#[source] DirectoryIntegrationError),

    #[error("User not found: {upn}")]
    UserNotFound {
        upn: String,
        #[source]
        source: DirectoryIntegrationError,
    },

    #[error("Failed to fetch group memberships")]
    GroupMembershipFetchFailed(#[source] DirectoryIntegrationError),

    #[error("user principal name must not be empty")]
    InvalidUserPrincipalName,
}
