use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::group_lookup::{
    domain::model::{
        entities::group_membership::GroupMembership,
        value_objects::{
            directory_user_id::DirectoryUserId, user_principal_name::UserPrincipalName,
        },
    },
    interfaces::acl::directory_facade::{
        DirectoryAccessToken, DirectoryFacade, DirectoryIntegrationError, DirectoryUserRecord,
    },
};

pub struct GraphDirectoryFacadeConfig {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub login_base_url: String,
    pub graph_base_url: String,
    pub timeout: Duration,
}

#[derive(Deserialize)]
struct TokenEnvelope {
    access_token: Option<String>,
}

#[derive(Deserialize)]
struct DirectoryUserEnvelope {
    id: Option<String>,
    #[serde(rename = "userPrincipalName")]
    user_principal_name: Option<String>,
}

#[derive(Deserialize)]
struct MemberOfEnvelope {
    #[serde(default)]
    value: Vec<Map<String, Value>>,
}

pub struct GraphDirectoryFacadeImpl {
    client: reqwest::Client,
    config: GraphDirectoryFacadeConfig,
}

impl GraphDirectoryFacadeImpl {
    pub fn new(config: GraphDirectoryFacadeConfig) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self { client, config })
    }

    fn token_url(&self) -> String {
        format!(
            "{}/{}/oauth2/v2.0/token",
            self.config.login_base_url, self.config.tenant_id
        )
    }

    fn default_scope(&self) -> String {
        format!("{}/.default", self.config.graph_base_url)
    }

    fn user_url(&self, user_principal_name: &UserPrincipalName) -> String {
        format!(
            "{}/v1.0/users/{}",
            self.config.graph_base_url,
            urlencoding::encode(user_principal_name.value())
        )
    }

    fn member_of_url(&self, user_id: &DirectoryUserId) -> String {
        format!(
            "{}/v1.0/users/{}/memberOf",
            self.config.graph_base_url,
            urlencoding::encode(user_id.value())
        )
    }
}

#[async_trait]
impl DirectoryFacade for GraphDirectoryFacadeImpl {
    async fn acquire_application_token(
        &self,
    ) -> Result<DirectoryAccessToken, DirectoryIntegrationError> {
        let scope = self.default_scope();
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("scope", scope.as_str()),
        ];

        let response = self
            .client
            .post(self.token_url())
            .form(&form)
            .send()
            .await
            .map_err(|e| DirectoryIntegrationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryIntegrationError::AuthenticationRejected(
                status.as_u16(),
            ));
        }

        let envelope: TokenEnvelope = response
            .json()
            .await
            .map_err(|e| DirectoryIntegrationError::MalformedResponse(e.to_string()))?;

        match envelope.access_token {
            Some(token) if !token.is_empty() => Ok(DirectoryAccessToken::new(token)),
            _ => Err(DirectoryIntegrationError::MalformedResponse(
                "token response is missing access_token".to_string(),
            )),
        }
    }

    async fn resolve_user(
        &self,
        token: &DirectoryAccessToken,
        user_principal_name: &UserPrincipalName,
    ) -> Result<DirectoryUserRecord, DirectoryIntegrationError> {
        let response = self
            .client
            .get(self.user_url(user_principal_name))
            .bearer_auth(token.secret())
            .send()
            .await
            .map_err(|e| DirectoryIntegrationError::Transport(e.to_string()))?;

        let status = response.status();
        if matches!(status.as_u16(), 401 | 403) {
            return Err(DirectoryIntegrationError::AuthenticationRejected(
                status.as_u16(),
            ));
        }
        // The user endpoint is only trusted on an exact 200.
        if status.as_u16() != 200 {
            return Err(DirectoryIntegrationError::UpstreamStatus(status.as_u16()));
        }

        let envelope: DirectoryUserEnvelope = response
            .json()
            .await
            .map_err(|e| DirectoryIntegrationError::MalformedResponse(e.to_string()))?;

        let id = envelope.id.ok_or_else(|| {
            DirectoryIntegrationError::MalformedResponse(
                "user response is missing id".to_string(),
            )
        })?;
        let id = DirectoryUserId::new(&id).map_err(DirectoryIntegrationError::MalformedResponse)?;

        Ok(DirectoryUserRecord {
            id,
            user_principal_name: envelope
                .user_principal_name
                .unwrap_or_else(|| user_principal_name.value().to_string()),
        })
    }

    async fn fetch_group_memberships(
        &self,
        token: &DirectoryAccessToken,
        user_id: &DirectoryUserId,
    ) -> Result<Vec<GroupMembership>, DirectoryIntegrationError> {
        let response = self
            .client
            .get(self.member_of_url(user_id))
            .bearer_auth(token.secret())
            .send()
            .await
            .map_err(|e| DirectoryIntegrationError::Transport(e.to_string()))?;

        let status = response.status();
        if matches!(status.as_u16(), 401 | 403) {
            return Err(DirectoryIntegrationError::AuthenticationRejected(
                status.as_u16(),
            ));
        }
        if !status.is_success() {
            return Err(DirectoryIntegrationError::UpstreamStatus(status.as_u16()));
        }

        let envelope: MemberOfEnvelope = response
            .json()
            .await
            .map_err(|e| DirectoryIntegrationError::MalformedResponse(e.to_string()))?;

        Ok(envelope
            .value
            .into_iter()
            .map(GroupMembership::from_attributes)
            .collect())
    }
}
