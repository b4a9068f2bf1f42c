use std::{sync::Arc, time::Duration};

use axum::Router;

use crate::{
    config::app_config::AppConfig,
    group_lookup::{
        application::{
            acl::graph_directory_facade_impl::{
                GraphDirectoryFacadeConfig, GraphDirectoryFacadeImpl,
            },
            query_services::group_membership_lookup_query_service_impl::GroupMembershipLookupQueryServiceImpl,
        },
        interfaces::rest::controllers::group_lookup_rest_controller::{
            GroupLookupRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_group_lookup_router(config: &AppConfig) -> Result<Router, String> {
    let directory_facade = Arc::new(GraphDirectoryFacadeImpl::new(GraphDirectoryFacadeConfig {
        tenant_id: config.tenant_id.clone(),
        client_id: config.client_id.clone(),
        client_secret: config.client_secret.clone(),
        login_base_url: config.login_base_url.clone(),
        graph_base_url: config.graph_base_url.clone(),
        timeout: Duration::from_secs(config.directory_timeout_secs),
    })?);

    let query_service = Arc::new(GroupMembershipLookupQueryServiceImpl::new(directory_facade));

    Ok(router(GroupLookupRestControllerState {
        query_service,
        invocation_code: config.invocation_code.clone(),
    }))
}
