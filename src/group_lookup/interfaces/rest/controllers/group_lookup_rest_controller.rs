use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};

use crate::group_lookup::{
    domain::{
        model::{
            enums::lookup_outcome::LookupOutcome,
            queries::lookup_group_memberships_query::LookupGroupMembershipsQuery,
        },
        services::group_membership_lookup_query_service::GroupMembershipLookupQueryService,
    },
    interfaces::rest::{
        resources::group_lookup_page_query_resource::GroupLookupPageQueryResource,
        views::group_lookup_page_view,
    },
};

#[derive(Clone)]
pub struct GroupLookupRestControllerState {
    pub query_service: Arc<dyn GroupMembershipLookupQueryService>,
    pub invocation_code: String,
}

pub fn router(state: GroupLookupRestControllerState) -> Router {
    Router::new()
        .route("/group-lookup", get(render_group_lookup_page))
        .with_state(state)
}

/// Upstream failures are rendered inline, never surfaced as 4xx/5xx; the
/// endpoint answers 200 with HTML for every request.
#[utoipa::path(
    get,
    path = "/group-lookup",
    tag = "group-lookup",
    params(("upn" = Option<String>, Query, description = "User principal name to look up")),
    responses(
        (status = 200, description = "Lookup page with form and outcome", body = String, content_type = "text/html")
    )
)]
pub async fn render_group_lookup_page(
    State(state): State<GroupLookupRestControllerState>,
    query: Option<Query<GroupLookupPageQueryResource>>,
) -> Html<String> {
    // A missing, empty, or whitespace-only upn renders the bare form.
    let submitted = query
        .and_then(|Query(resource)| resource.upn)
        .map(|upn| upn.trim().to_string())
        .filter(|upn| !upn.is_empty());

    let Some(upn) = submitted else {
        return Html(group_lookup_page_view::render(None, None, ""));
    };

    let action_url = build_action_url(&state.invocation_code, &upn);

    let result = match LookupGroupMembershipsQuery::new(upn.clone()) {
        Ok(lookup_query) => state.query_service.handle_lookup(lookup_query).await,
        Err(error) => Err(error),
    };

    if let Err(error) = &result {
        tracing::warn!(upn = %upn, error = ?error, "group membership lookup failed");
    }

    let outcome = LookupOutcome::from_result(result);

    Html(group_lookup_page_view::render(
        Some(&upn),
        Some(&outcome),
        &action_url,
    ))
}

/// Resubmitting the form must reuse the same invocation authorization, so the
/// pre-shared code travels in the form target next to the looked-up upn.
fn build_action_url(invocation_code: &str, upn: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("code", invocation_code)
        .append_pair("upn", upn)
        .finish();

    format!("/group-lookup?{}", query)
}
