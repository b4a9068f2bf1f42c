use std::sync::Arc;

use async_trait::async_trait;

use crate::group_lookup::{
    domain::{
        model::{
            entities::group_membership::GroupMembership,
            enums::group_lookup_domain_error::GroupLookupDomainError,
            queries::lookup_group_memberships_query::LookupGroupMembershipsQuery,
        },
        services::group_membership_lookup_query_service::GroupMembershipLookupQueryService,
    },
    interfaces::acl::directory_facade::DirectoryFacade,
};

pub struct GroupMembershipLookupQueryServiceImpl {
    directory_facade: Arc<dyn DirectoryFacade>,
}

impl GroupMembershipLookupQueryServiceImpl {
    pub fn new(directory_facade: Arc<dyn DirectoryFacade>) -> Self {
        Self { directory_facade }
    }
}

#[async_trait]
impl GroupMembershipLookupQueryService for GroupMembershipLookupQueryServiceImpl {
    /// Three dependent directory calls in strict sequence. The first failure
    /// is terminal; later steps are never attempted after it.
    async fn handle_lookup(
        &self,
        query: LookupGroupMembershipsQuery,
    ) -> Result<Vec<GroupMembership>, GroupLookupDomainError> {
        let token = self
            .directory_facade
            .acquire_application_token()
            .await
            .map_err(GroupLookupDomainError::TokenAcquisitionFailed)?;

        let user = self
            .directory_facade
            .resolve_user(&token, query.user_principal_name())
            .await
            .map_err(|source| GroupLookupDomainError::UserNotFound {
                upn: query.user_principal_name().value().to_string(),
                source,
            })?;

        self.directory_facade
            .fetch_group_memberships(&token, &user.id)
            .await
            .map_err(GroupLookupDomainError::GroupMembershipFetchFailed)
    }
}
