//! Comparison entities
//!
//! Everything here is created fresh for one comparison call and dropped once
//! the response has been serialized. Field names on the wire are camelCase and
//! a few of them are renamed to the names the web frontend already consumes
//! (`llm`, `response`, `responseTime`, `resetAfter`).

use crate::constants::ERROR_PREFIX;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One prompt fanned out to an ordered list of backend names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    pub prompt: String,
    pub backends: Vec<String>,
}

impl ComparisonRequest {
    pub fn new<I, S>(prompt: impl Into<String>, backends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            backends: backends.into_iter().map(Into::into).collect(),
        }
    }
}

/// Rate-limit counters as reported by the provider for a single call.
///
/// Every field is optional: providers that do not send a given header leave
/// it unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitInfo {
    pub requests_limit: Option<u64>,
    pub requests_remaining: Option<u64>,
    pub tokens_limit: Option<u64>,
    pub tokens_remaining: Option<u64>,
    /// Seconds until the request window resets.
    #[serde(rename = "resetAfter")]
    pub reset_after: Option<u64>,
}

impl RateLimitInfo {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Token accounting returned by a provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

impl TokenUsage {
    /// Builds usage from possibly missing counters. A missing total falls back
    /// to the sum of the two parts.
    pub fn from_counts(prompt: Option<u64>, completion: Option<u64>, total: Option<u64>) -> Self {
        let prompt_tokens = prompt.unwrap_or_default();
        let completion_tokens = completion.unwrap_or_default();
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: total.unwrap_or(prompt_tokens.saturating_add(completion_tokens)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    /// Model identifier reported by the provider; may differ from the backend name.
    pub model: String,
    pub finish_reason: Option<String>,
    pub prompt_tokens: u64,
    pub generation_tokens: u64,
    pub total_tokens: u64,
    /// Wall-clock duration of the call in milliseconds, measured by the engine.
    #[serde(rename = "responseTime")]
    pub response_time: u64,
    /// RFC 3339 instant at which this metadata was assembled.
    pub timestamp: String,
    pub rate_limit: RateLimitInfo,
}

/// Outcome for a single requested backend.
///
/// `metadata` is present exactly when the call succeeded; a failed call
/// carries the error message in `text` behind [`ERROR_PREFIX`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModelResult {
    #[serde(rename = "llm")]
    pub backend_name: String,
    #[serde(rename = "response")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ResponseMetadata>,
}

impl ModelResult {
    pub fn success(
        backend_name: impl Into<String>,
        text: impl Into<String>,
        metadata: ResponseMetadata,
    ) -> Self {
        Self {
            backend_name: backend_name.into(),
            text: text.into(),
            metadata: Some(metadata),
        }
    }

    pub fn failure(backend_name: impl Into<String>, message: impl AsRef<str>) -> Self {
        Self {
            backend_name: backend_name.into(),
            text: format!("{ERROR_PREFIX}{}", message.as_ref()),
            metadata: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.metadata.is_some()
    }
}

/// Ordered results, one per requested backend name, in request order.
pub type ComparisonResult = Vec<ModelResult>;
