use super::dto::{CompareRequestBody, CompareResponse, ErrorResponse};
use super::routes;
use crate::domain::{ModelResult, RateLimitInfo, ResponseMetadata};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::llm::available_handler,
        routes::llm::compare_handler,
        routes::llm::health_handler
    ),
    components(
        schemas(
            CompareRequestBody,
            CompareResponse,
            ErrorResponse,
            ModelResult,
            ResponseMetadata,
            RateLimitInfo
        )
    ),
    tags(
        (name = "llm", description = "Compare one prompt across configured LLM backends")
    )
)]
pub(super) struct ApiDoc;
