use axum::Router;
use dotenvy::dotenv;
use group_lookup_api::{
    config::app_config::AppConfig,
    group_lookup::{
        build_group_lookup_router,
        interfaces::rest::resources::group_lookup_page_query_resource::GroupLookupPageQueryResource,
    },
    shared::interfaces::rest::middleware::correlation::propagate_request_id,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        group_lookup_api::group_lookup::interfaces::rest::controllers::group_lookup_rest_controller::render_group_lookup_page
    ),
    components(schemas(GroupLookupPageQueryResource)),
    tags(
        (name = "group-lookup", description = "Directory group membership lookup bounded context")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let group_lookup_router =
        build_group_lookup_router(&config).expect("failed to build group lookup router");

    let app = Router::new()
        .merge(group_lookup_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(propagate_request_id));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(
        "group lookup page available at http://localhost:{}/group-lookup",
        config.port
    );
    tracing::info!(
        "swagger ui available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
