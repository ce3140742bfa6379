// Config loading tests - AppConfig::load from real files on disk

use llm_compare_core::config::{AppConfig, ConfigError};
use llm_compare_core::model::ModelRegistry;
use std::fs;
use std::path::{Path, PathBuf};
use serial_test::serial;
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("backends.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
fn returns_error_when_file_not_found() {
    let result = AppConfig::load(Some(Path::new("/nonexistent/path/backends.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn returns_error_on_invalid_toml() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[[backends]\nid = ");
    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn returns_error_when_no_backends() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
[server]
bind = "127.0.0.1:8080"
"#,
    );
    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::NoBackendsConfigured)));
}

#[test]
fn returns_error_when_endpoint_missing() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
[[backends]]
id = "openai"
model = "gpt-4o-mini"
"#,
    );
    let result = AppConfig::load(Some(&path));
    assert!(matches!(
        result,
        Err(ConfigError::MissingEndpoint { backend }) if backend == "openai"
    ));
}

#[test]
fn returns_error_when_model_missing() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
[[backends]]
id = "ollama"
endpoint = "http://127.0.0.1:11434"
"#,
    );
    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::MissingModel { .. })));
}

#[test]
fn loads_full_config_and_builds_registry() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
[server]
bind = "0.0.0.0:9090"
cors_origins = ["http://localhost:5173", "http://127.0.0.1:5173"]

[[backends]]
id = "openai"
type = "openai"
endpoint = "https://api.openai.com"
api_key = "LLM_COMPARE_TEST_UNSET_KEY"
model = "gpt-4o-mini"
timeout_secs = 30

[[backends]]
id = "anthropic"
type = "anthropic"
endpoint = "https://api.anthropic.com"
api_key = "LLM_COMPARE_TEST_UNSET_KEY"
model = "claude-3-5-haiku-20241022"
max_tokens = 2048

[[backends]]
id = "ollama"
endpoint = "http://127.0.0.1:11434"
model = "llama3.2"
"#,
    );

    let config = AppConfig::load(Some(&path)).expect("config loads");
    assert_eq!(config.server.bind.port(), 9090);
    assert_eq!(config.server.cors_origins.len(), 2);
    assert_eq!(config.backend_ids(), ["openai", "anthropic", "ollama"]);
    assert_eq!(config.backends[0].timeout_secs, 30);
    assert_eq!(config.backends[1].max_tokens, Some(2048));
    assert!(config.backends[2].is_ollama());

    // Missing API keys are reported per call, not at startup.
    let registry = ModelRegistry::from_configs(&config.backends).expect("registry");
    assert_eq!(registry.len(), 3);
    assert!(registry.has("anthropic"));
}

#[test]
#[serial]
fn expands_environment_variables_in_endpoint() {
    unsafe {
        std::env::set_var("LLM_COMPARE_TEST_OLLAMA_HOST", "http://10.0.0.7:11434");
    }
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
[[backends]]
id = "ollama"
endpoint = "${LLM_COMPARE_TEST_OLLAMA_HOST}"
model = "llama3.2"
"#,
    );

    let config = AppConfig::load(Some(&path)).expect("config loads");
    assert_eq!(config.backends[0].endpoint, "http://10.0.0.7:11434");
}
