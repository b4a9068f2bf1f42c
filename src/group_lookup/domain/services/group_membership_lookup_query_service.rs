use async_trait::async_trait;

use crate::group_lookup::domain::model::{
    entities::group_membership::GroupMembership,
    enums::group_lookup_domain_error::GroupLookupDomainError,
    queries::lookup_group_memberships_query::LookupGroupMembershipsQuery,
};

#[async_trait]
pub trait GroupMembershipLookupQueryService: Send + Sync {
    async fn handle_lookup(
        &self,
        query: LookupGroupMembershipsQuery,
    ) -> Result<Vec<GroupMembership>, GroupLookupDomainError>;
}
