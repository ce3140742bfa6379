use super::docs::ApiDoc;
use super::error::{ServerError, panic_response};
use super::routes;
use super::state::ServerState;
use crate::application::ComparisonEngine;
use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// Builds the full application router: API routes, Swagger UI, CORS and
/// panic recovery.
pub fn build_router(engine: Arc<ComparisonEngine>, cors_origins: &[String]) -> Router {
    let api = ApiDoc::openapi();
    let state = Arc::new(ServerState::new(engine));

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", api))
        .route("/api/llm/available", get(routes::llm::available_handler))
        .route("/api/llm/compare", post(routes::llm::compare_handler))
        .route("/api/llm/health", get(routes::llm::health_handler))
        .with_state(state);
    with_middleware(app, cors_origins)
}

/// Panic recovery inside, CORS outermost so error responses keep CORS headers.
fn with_middleware(app: Router, cors_origins: &[String]) -> Router {
    app.layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(cors_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = origin.as_str(), "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}

pub(super) async fn serve(
    engine: Arc<ComparisonEngine>,
    addr: SocketAddr,
    cors_origins: &[String],
) -> Result<(), ServerError> {
    info!(%addr, "Binding REST server");
    let app = build_router(engine, cors_origins);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "REST server ready to accept connections");

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}
