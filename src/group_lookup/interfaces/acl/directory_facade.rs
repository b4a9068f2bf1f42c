use std::fmt;

use async_trait::async_trait;

use crate::group_lookup::domain::model::{
    entities::group_membership::GroupMembership,
    value_objects::{directory_user_id::DirectoryUserId, user_principal_name::UserPrincipalName},
};

/// Bearer credential obtained through the client-credentials grant. Lives for
/// one invocation; never cached and never printed.
#[derive(Clone)]
pub struct DirectoryAccessToken(String);

impl DirectoryAccessToken {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DirectoryAccessToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("DirectoryAccessToken(<redacted>)")
    }
}

#[derive(Clone, Debug)]
pub struct DirectoryUserRecord {
    pub id: DirectoryUserId,
    pub user_principal_name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryIntegrationError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("authentication rejected with status {0}")]
    AuthenticationRejected(u16),

    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait DirectoryFacade: Send + Sync {
    async fn acquire_application_token(
        &self,
    ) -> Result<DirectoryAccessToken, DirectoryIntegrationError>;

    async fn resolve_user(
        &self,
        token: &DirectoryAccessToken,
        user_principal_name: &UserPrincipalName,
    ) -> Result<DirectoryUserRecord, DirectoryIntegrationError>;

    async fn fetch_group_memberships(
        &self,
        token: &DirectoryAccessToken,
        user_id: &DirectoryUserId,
    ) -> Result<Vec<GroupMembership>, DirectoryIntegrationError>;
}
