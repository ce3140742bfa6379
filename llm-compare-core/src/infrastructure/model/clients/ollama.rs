//! Ollama client implementation

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::base::HttpClientBase;
use crate::config::BackendConfig;
use crate::domain::TokenUsage;
use crate::infrastructure::model::adapter::MessageAdapter;
use crate::infrastructure::model::traits::ModelClient;
use crate::infrastructure::model::types::{ModelError, ModelRequest, ModelResponse};

/// Ollama client for local LLM. Ollama reports no rate limits.
#[derive(Clone)]
pub struct OllamaClient {
    base: HttpClientBase,
    model: String,
}

impl OllamaClient {
    /// Creates client from backend config.
    pub fn from_config(config: &BackendConfig) -> Self {
        Self {
            base: HttpClientBase::new(
                config.id.clone(),
                config.endpoint.clone(),
                None,
                Duration::from_secs(config.timeout_secs),
            ),
            model: config.model.clone(),
        }
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    fn id(&self) -> &str {
        &self.base.id
    }

    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let url = self.base.build_url("/api/chat");

        let payload = OllamaRequest {
            model: self.model.clone(),
            messages: MessageAdapter::to_ollama_format(&request.messages),
            stream: false,
        };

        info!(
            provider = self.base.id.as_str(),
            model = self.model.as_str(),
            messages = request.messages.len(),
            "Sending request to Ollama"
        );

        let reply = self
            .base
            .post_no_auth::<_, OllamaResponse>(&url, &payload)
            .await?;
        debug!("Received response from Ollama");

        let body = reply.body;
        let content = body
            .message
            .ok_or_else(|| ModelError::invalid_response(&self.base.id, "missing message"))?
            .content;
        let usage = TokenUsage::from_counts(body.prompt_eval_count, body.eval_count, None);

        Ok(
            ModelResponse::new(content, body.model.unwrap_or_else(|| self.model.clone()))
                .with_finish_reason(body.done_reason)
                .with_usage(usage),
        )
    }
}

#[derive(Serialize)]
struct OllamaRequest {
    model: String,
    messages: Vec<serde_json::Value>,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaResponse {
    model: Option<String>,
    message: Option<OllamaMessage>,
    done_reason: Option<String>,
    prompt_eval_count: Option<u64>,
    eval_count: Option<u64>,
}

#[derive(Deserialize)]
struct OllamaMessage {
    content: String,
}
