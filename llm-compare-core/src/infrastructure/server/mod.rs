//! REST surface for the comparison engine
//!
//! - `GET  /api/llm/available` - configured backend names
//! - `POST /api/llm/compare`   - fan a prompt out to the requested backends
//! - `GET  /api/llm/health`    - liveness probe
//!
//! OpenAPI docs are served under `/swagger-ui`.

mod docs;
mod dto;
mod error;
mod router;
mod routes;
mod state;

pub use dto::{CompareRequestBody, CompareResponse, ErrorResponse};
pub use error::{ApiError, ServerError};
pub use router::build_router;

use crate::application::ComparisonEngine;
use crate::config::RestServerConfig;
use std::sync::Arc;

pub async fn serve(
    engine: Arc<ComparisonEngine>,
    config: &RestServerConfig,
) -> Result<(), ServerError> {
    router::serve(engine, config.bind, &config.cors_origins).await
}
