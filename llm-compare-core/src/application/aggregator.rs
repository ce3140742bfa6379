//! Success/failure unification for a single dispatch task.

use crate::domain::{ModelResult, ResponseMetadata};
use crate::infrastructure::model::ModelResponse;
use chrono::{SecondsFormat, Utc};
use std::time::Duration;

/// Turns provider responses and failures into `ModelResult`s.
pub struct ResultAggregator;

impl ResultAggregator {
    /// Builds metadata for a completed call. Provider fields are copied as-is;
    /// `response_time` is the engine-measured `elapsed` and `timestamp` is
    /// taken now, after the call has returned.
    pub fn metadata(response: &ModelResponse, elapsed: Duration) -> ResponseMetadata {
        ResponseMetadata {
            model: response.model.clone(),
            finish_reason: response.finish_reason.clone(),
            prompt_tokens: response.usage.prompt_tokens,
            generation_tokens: response.usage.completion_tokens,
            total_tokens: response.usage.total_tokens,
            response_time: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            rate_limit: response.rate_limit.clone(),
        }
    }

    pub fn success(backend: &str, response: ModelResponse, elapsed: Duration) -> ModelResult {
        let metadata = Self::metadata(&response, elapsed);
        ModelResult::success(backend, response.text, metadata)
    }

    pub fn failure(backend: &str, error: impl std::fmt::Display) -> ModelResult {
        ModelResult::failure(backend, error.to_string())
    }
}
