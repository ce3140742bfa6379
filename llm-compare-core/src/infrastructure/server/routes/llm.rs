use super::super::dto::{CompareRequestBody, CompareResponse, ErrorResponse};
use super::super::error::ApiError;
use super::super::state::ServerState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};

#[utoipa::path(
    get,
    path = "/api/llm/available",
    tag = "llm",
    responses(
        (status = 200, description = "Names of every configured backend", body = Vec<String>)
    )
)]
pub async fn available_handler(State(state): State<Arc<ServerState>>) -> Json<BTreeSet<String>> {
    let models = state.engine().available_models();
    debug!(count = models.len(), "Serving /api/llm/available request");
    Json(models)
}

#[utoipa::path(
    post,
    path = "/api/llm/compare",
    tag = "llm",
    request_body = CompareRequestBody,
    responses(
        (status = 200, description = "One result per requested backend, in request order", body = CompareResponse),
        (status = 400, description = "Validation failed or body is not valid JSON", body = ErrorResponse),
        (status = 404, description = "One or more requested backends are not configured", body = ErrorResponse),
        (status = 415, description = "Body is not sent as application/json", body = ErrorResponse),
        (status = 500, description = "Unexpected server failure", body = ErrorResponse)
    )
)]
pub async fn compare_handler(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<CompareRequestBody>, JsonRejection>,
) -> Result<Json<CompareResponse>, ApiError> {
    let Json(body) = payload?;
    let request = body.validate()?;
    info!(
        prompt_chars = request.prompt.chars().count(),
        llms = ?request.backends,
        "Received /api/llm/compare request"
    );

    let responses = state.engine().compare(request).await?;
    Ok(Json(CompareResponse { responses }))
}

#[utoipa::path(
    get,
    path = "/api/llm/health",
    tag = "llm",
    responses(
        (status = 200, description = "Service is up")
    )
)]
pub async fn health_handler() -> StatusCode {
    StatusCode::OK
}
