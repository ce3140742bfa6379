use super::dto::ErrorResponse;
use crate::application::CompareError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::any::Any;
use std::collections::BTreeMap;
use std::net::SocketAddr;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind HTTP listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Request-level failures, each mapped to one status code and error category.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request parameters")]
    Validation { details: BTreeMap<String, String> },
    #[error("Could not parse JSON request body")]
    MalformedJson { reason: String },
    #[error("{0}")]
    UnsupportedMediaType(String),
    #[error(transparent)]
    Compare(#[from] CompareError),
    #[error("An unexpected error occurred")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::MalformedJson { .. } => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Compare(CompareError::ModelNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "Validation Failed",
            ApiError::MalformedJson { .. } => "Malformed JSON",
            ApiError::UnsupportedMediaType(_) => "Unsupported Media Type",
            ApiError::Compare(CompareError::ModelNotFound { .. }) => "Model Not Found",
            ApiError::Internal => "Internal Server Error",
        }
    }

    pub fn to_body(&self) -> ErrorResponse {
        let body = ErrorResponse::new(self.status().as_u16(), self.category(), self.to_string());
        match self {
            ApiError::Validation { details } => body.with_details(details.clone()),
            _ => body,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(inner) => {
                ApiError::UnsupportedMediaType(inner.body_text())
            }
            other => ApiError::MalformedJson {
                reason: other.body_text(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation { details } => error!(?details, "Validation error"),
            ApiError::MalformedJson { reason } => error!(%reason, "JSON parse error"),
            ApiError::UnsupportedMediaType(message) => error!(%message, "Unsupported media type"),
            ApiError::Compare(error) => error!(%error, "Model not found"),
            ApiError::Internal => error!("Unexpected internal error"),
        }
        (self.status(), Json(self.to_body())).into_response()
    }
}

/// Converts a handler panic into the generic 500 body. The panic payload is
/// only logged, never returned to the caller.
pub(super) fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    error!(panic = detail, "Handler panicked");
    ApiError::Internal.into_response()
}
