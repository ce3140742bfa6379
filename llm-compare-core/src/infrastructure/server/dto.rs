use super::error::ApiError;
use crate::domain::{ComparisonRequest, ModelResult};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Body of `POST /api/llm/compare`.
///
/// Both fields are optional at the serde level so that a missing field is
/// reported as a validation failure with per-field details rather than as a
/// parse error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CompareRequestBody {
    pub prompt: Option<String>,
    pub llms: Option<Vec<String>>,
}

impl CompareRequestBody {
    pub fn validate(self) -> Result<ComparisonRequest, ApiError> {
        let mut details = BTreeMap::new();
        let prompt = self.prompt.filter(|p| !p.is_empty());
        if prompt.is_none() {
            details.insert("prompt".to_string(), "must not be empty".to_string());
        }
        if self.llms.is_none() {
            details.insert("llms".to_string(), "must not be null".to_string());
        }

        match (prompt, self.llms) {
            (Some(prompt), Some(llms)) => Ok(ComparisonRequest::new(prompt, llms)),
            _ => Err(ApiError::Validation { details }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompareResponse {
    pub responses: Vec<ModelResult>,
}

/// Uniform error body for every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(status: u16, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            status,
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: BTreeMap<String, String>) -> Self {
        self.details = Some(details);
        self
    }
}
