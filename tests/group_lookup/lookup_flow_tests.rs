use axum::{body::Body, http::Request};
use group_lookup_api::{config::app_config::AppConfig, group_lookup::build_group_lookup_router};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, path_regex},
};

fn config_for(server: &MockServer) -> AppConfig {
    AppConfig {
        port: 0,
        tenant_id: "tenant-1".to_string(),
        client_id: "client-1".to_string(),
        client_secret: "secret-1".to_string(),
        invocation_code: "shared-code-123".to_string(),
        login_base_url: server.uri(),
        graph_base_url: server.uri(),
        directory_timeout_secs: 5,
    }
}

async fn get_lookup_page(server: &MockServer, encoded_upn: &str) -> String {
    let page_router = build_group_lookup_router(&config_for(server)).expect("router builds");

    let response = page_router
        .oneshot(
            Request::builder()
                .uri(format!("/group-lookup?upn={}", encoded_upn))
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("request succeeds");

    let body = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    String::from_utf8(body.to_vec()).expect("utf8 body")
}

#[tokio::test]
async fn a_failing_token_endpoint_short_circuits_the_remaining_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tenant-1/oauth2/v2.0/token"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "server_error" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/v1.0/users/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "user-guid-1" })))
        .expect(0)
        .mount(&server)
        .await;

    let html = get_lookup_page(&server, "jdoe%40example.com").await;

    assert!(html.contains("Failed to acquire token"));
    let received = server.received_requests().await.expect("requests recorded");
    assert_eq!(received.len(), 1);
}

#[tokio::test]
async fn an_unresolved_user_short_circuits_the_membership_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tenant-1/oauth2/v2.0/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "expires_in": 3599,
            "access_token": "token-123"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/v1.0/users/[^/]+$"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": "Request_ResourceNotFound" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"/memberOf$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let html = get_lookup_page(&server, "ghost%40example.com").await;

    assert!(html.contains("User not found: ghost@example.com"));
    let received = server.received_requests().await.expect("requests recorded");
    assert_eq!(received.len(), 2);
}

#[tokio::test]
async fn a_successful_flow_renders_the_groups_and_the_resubmission_target() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tenant-1/oauth2/v2.0/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "expires_in": 3599,
            "access_token": "token-123"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/v1.0/users/[^/]+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user-guid-1",
            "userPrincipalName": "jdoe@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/users/user-guid-1/memberOf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [
                { "displayName": "Engineering" },
                { "displayName": "AllStaff" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let html = get_lookup_page(&server, "jdoe%40example.com").await;

    assert!(html.contains("Groups for <code>jdoe@example.com</code>"));
    assert!(html.contains("Engineering"));
    assert!(html.contains("AllStaff"));
    assert!(
        html.contains(r#"action="/group-lookup?code=shared-code-123&amp;upn=jdoe%40example.com""#)
    );
}
