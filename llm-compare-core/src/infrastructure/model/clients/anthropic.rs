//! Anthropic Messages API client

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::base::HttpClientBase;
use crate::config::BackendConfig;
use crate::constants::{ANTHROPIC_VERSION, DEFAULT_ANTHROPIC_API_PATH, DEFAULT_ANTHROPIC_MAX_TOKENS};
use crate::domain::TokenUsage;
use crate::infrastructure::model::adapter::MessageAdapter;
use crate::infrastructure::model::factory::resolve_api_key;
use crate::infrastructure::model::rate_limit::anthropic_rate_limit;
use crate::infrastructure::model::traits::ModelClient;
use crate::infrastructure::model::types::{ModelError, ModelRequest, ModelResponse};

#[derive(Clone)]
pub struct AnthropicClient {
    base: HttpClientBase,
    api_path: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicClient {
    pub fn from_config(config: &BackendConfig) -> Self {
        let api_key = resolve_api_key(&config.id, config.api_key.as_deref());
        Self {
            base: HttpClientBase::new(
                config.id.clone(),
                config.endpoint.clone(),
                api_key,
                Duration::from_secs(config.timeout_secs),
            ),
            api_path: config
                .api_path
                .clone()
                .unwrap_or_else(|| DEFAULT_ANTHROPIC_API_PATH.to_string()),
            model: config.model.clone(),
            max_tokens: config.max_tokens.unwrap_or(DEFAULT_ANTHROPIC_MAX_TOKENS),
        }
    }
}

#[async_trait]
impl ModelClient for AnthropicClient {
    fn id(&self) -> &str {
        &self.base.id
    }

    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let url = self.base.build_url(&self.api_path);
        let (system, messages) = MessageAdapter::to_anthropic_format(&request.messages);

        let payload = AnthropicRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            system,
            messages,
        };

        info!(
            provider = self.base.id.as_str(),
            model = self.model.as_str(),
            messages = request.messages.len(),
            "Sending request to Anthropic"
        );

        let reply = self
            .base
            .post_with_key_header::<_, AnthropicResponse>(
                &url,
                "x-api-key",
                &[("anthropic-version", ANTHROPIC_VERSION)],
                &payload,
            )
            .await?;
        debug!("Received response from Anthropic");

        let rate_limit = anthropic_rate_limit(&reply.headers, Utc::now());
        let body = reply.body;
        let content = body
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text)
            .collect::<Vec<_>>();
        if content.is_empty() {
            return Err(ModelError::invalid_response(&self.base.id, "missing text"));
        }

        let usage = body
            .usage
            .map(|u| TokenUsage::from_counts(u.input_tokens, u.output_tokens, None))
            .unwrap_or_default();

        Ok(
            ModelResponse::new(content.join(""), body.model.unwrap_or_else(|| self.model.clone()))
                .with_finish_reason(body.stop_reason)
                .with_usage(usage)
                .with_rate_limit(rate_limit),
        )
    }
}

#[derive(Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    model: Option<String>,
    #[serde(default)]
    content: Vec<AnthropicBlock>,
    stop_reason: Option<String>,
    usage: Option<AnthropicUsage>,
}

#[derive(Deserialize)]
struct AnthropicBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[derive(Deserialize)]
struct AnthropicUsage {
    input_tokens: Option<u64>,
    output_tokens: Option<u64>,
}
