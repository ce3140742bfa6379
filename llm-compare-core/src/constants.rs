//! Application constants
//!
//! Single source of truth for paths, prompts and other constants.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/backends.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// System prompt sent with every comparison, identical for all backends.
pub const SYSTEM_PROMPT: &str = "You are chatting with a serious person. Make sure your responses are accurate, up-to-date, and straight to the point unless the user asks you not to. False, wrong or poorly researched responses are not allowed here.";

/// Prefix of the text stored in a failed `ModelResult`.
pub const ERROR_PREFIX: &str = "Error: ";

/// Default REST bind address
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Default CORS origin (Vite dev server)
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Default per-call HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default Gemini API path (fallback when not specified in config)
pub const DEFAULT_GEMINI_API_PATH: &str = "v1beta/models";

/// Default OpenAI-compatible chat path
pub const DEFAULT_OPENAI_API_PATH: &str = "/v1/chat/completions";

/// Default Anthropic messages path
pub const DEFAULT_ANTHROPIC_API_PATH: &str = "/v1/messages";

/// Anthropic API version header value
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic requires an explicit output budget
pub const DEFAULT_ANTHROPIC_MAX_TOKENS: u32 = 1024;
