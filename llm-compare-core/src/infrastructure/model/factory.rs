//! Provider factory - creates clients from config

use super::clients::{AnthropicClient, GeminiClient, OllamaClient, OpenAIClient};
use super::traits::ModelClient;
use crate::config::BackendConfig;
use std::env;
use std::sync::Arc;
use tracing::warn;

/// Resolve API key from the environment variable named in config.
///
/// A missing variable is logged and yields `None`; the backend then fails
/// per call with `MissingApiKey` instead of blocking startup.
pub fn resolve_api_key(provider: &str, env_var: Option<&str>) -> Option<String> {
    let raw = env_var.map(str::trim)?;
    if raw.is_empty() {
        return None;
    }
    match env::var(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(
                provider,
                env_var = raw,
                %err,
                "API key environment variable is not set"
            );
            None
        }
    }
}

/// Factory for creating model clients from backend config.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Creates a model client based on provider type.
    ///
    /// Supported types:
    /// - `ollama`, `localai` → Ollama format
    /// - `anthropic`, `claude` → Anthropic Messages format
    /// - `gemini`, `google` → Gemini format
    /// - Others → OpenAI-compatible format (default)
    pub fn create(config: &BackendConfig) -> Arc<dyn ModelClient> {
        if config.is_ollama() {
            Arc::new(OllamaClient::from_config(config))
        } else if config.is_anthropic() {
            Arc::new(AnthropicClient::from_config(config))
        } else if config.is_gemini() {
            Arc::new(GeminiClient::from_config(config))
        } else {
            Arc::new(OpenAIClient::from_config(config))
        }
    }
}
