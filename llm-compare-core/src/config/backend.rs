//! # Backend Configuration
//!
//! Each `[[backends]]` entry becomes one named backend in the registry.
//!
//! | Type | Description | API Key Required |
//! |------|-------------|-----------------|
//! | `openai` | OpenAI-compatible APIs (default) | Yes |
//! | `anthropic` | Anthropic Messages API | Yes |
//! | `ollama` | Local Ollama server | No |
//! | `gemini` | Google Gemini API | Yes |

use crate::constants::DEFAULT_TIMEOUT_SECS;
use serde::Deserialize;

/// Configuration for one named backend.
///
/// # Example
///
/// ```toml
/// [[backends]]
/// id = "anthropic"
/// type = "anthropic"
/// endpoint = "https://api.anthropic.com"
/// api_key = "ANTHROPIC_API_KEY"
/// model = "claude-3-5-haiku-latest"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Name callers use to select this backend (e.g., "openai", "ollama")
    pub id: String,
    /// The provider type determines API format: "openai", "anthropic", "ollama", "gemini"
    pub provider_type: String,
    /// API endpoint URL
    pub endpoint: String,
    /// Name of the environment variable holding the API key
    pub api_key: Option<String>,
    /// Custom API path override
    pub api_path: Option<String>,
    /// Provider model identifier sent with every call
    pub model: String,
    /// HTTP timeout for a single call
    pub timeout_secs: u64,
    /// Output token budget, for providers that require one
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct RawBackendConfig {
    pub(super) id: String,
    #[serde(rename = "type", default)]
    pub(super) provider_type: Option<String>,
    pub(super) endpoint: Option<String>,
    pub(super) api_key: Option<String>,
    #[serde(default)]
    pub(super) api_path: Option<String>,
    pub(super) model: Option<String>,
    #[serde(default)]
    pub(super) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(super) max_tokens: Option<u32>,
}

impl RawBackendConfig {
    /// Provider type, falling back to the backend id when `type` is omitted
    /// so that `id = "ollama"` alone selects the Ollama client.
    pub(super) fn resolved_type(&self) -> String {
        self.provider_type
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| self.id.clone())
    }
}

impl BackendConfig {
    pub fn new(
        id: impl Into<String>,
        provider_type: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            provider_type: provider_type.into(),
            endpoint: endpoint.into(),
            api_key: None,
            api_path: None,
            model: model.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_tokens: None,
        }
    }

    pub fn with_api_key(mut self, env_var: impl Into<String>) -> Self {
        self.api_key = Some(env_var.into());
        self
    }

    /// Check if this is an Ollama backend (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use llm_compare_core::config::BackendConfig;
    ///
    /// let backend = BackendConfig::new("local", "OLLAMA", "http://localhost:11434", "llama3.2");
    /// assert!(backend.is_ollama());
    /// assert!(!backend.is_anthropic());
    /// ```
    pub fn is_ollama(&self) -> bool {
        matches!(
            self.provider_type.to_lowercase().as_str(),
            "ollama" | "localai"
        )
    }

    pub fn is_anthropic(&self) -> bool {
        matches!(
            self.provider_type.to_lowercase().as_str(),
            "anthropic" | "claude"
        )
    }

    pub fn is_gemini(&self) -> bool {
        matches!(
            self.provider_type.to_lowercase().as_str(),
            "gemini" | "google" | "google-ai"
        )
    }
}
