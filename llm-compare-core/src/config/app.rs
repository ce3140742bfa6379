use super::backend::BackendConfig;
use super::error::ConfigError;
use super::server::RestServerConfig;
use std::path::Path;

/// Application configuration loaded from backends.toml
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: RestServerConfig,
    pub backends: Vec<BackendConfig>,
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Names of all configured backends, in declaration order
    pub fn backend_ids(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.id.as_str()).collect()
    }
}
