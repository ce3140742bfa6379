use super::CONFIG_PATH;
use super::backend::{BackendConfig, RawBackendConfig};
use super::error::ConfigError;
use super::server::{RawRestServer, RestServerConfig, default_bind};
use crate::constants::{DEFAULT_TIMEOUT_SECS, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub server: RawRestServer,
    #[serde(default)]
    pub backends: Vec<RawBackendConfig>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration from a file path
pub fn load_config(path: Option<&Path>) -> Result<super::AppConfig, ConfigError> {
    ensure_env_loaded();
    let config_path = path.unwrap_or_else(|| Path::new(CONFIG_PATH));
    read_config(config_path)
}

fn read_config(path: &Path) -> Result<super::AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading backend configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn expand(value: &str) -> String {
    shellexpand::full(value)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

fn validate_and_build(parsed: RawConfig) -> Result<super::AppConfig, ConfigError> {
    if parsed.backends.is_empty() {
        return Err(ConfigError::NoBackendsConfigured);
    }

    let mut seen = HashSet::new();
    let mut backends = Vec::with_capacity(parsed.backends.len());
    for raw in parsed.backends {
        if !seen.insert(raw.id.clone()) {
            return Err(ConfigError::DuplicateBackend { backend: raw.id });
        }
        let provider_type = raw.resolved_type();
        let endpoint = raw
            .endpoint
            .as_deref()
            .map(expand)
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEndpoint {
                backend: raw.id.clone(),
            })?;
        let model = raw
            .model
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingModel {
                backend: raw.id.clone(),
            })?;

        backends.push(BackendConfig {
            id: raw.id,
            provider_type,
            endpoint,
            api_key: raw.api_key,
            api_path: raw.api_path,
            model,
            timeout_secs: raw.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            max_tokens: raw.max_tokens,
        });
    }

    let bind_value = parsed
        .server
        .bind
        .unwrap_or_else(|| default_bind().to_string());
    let bind: SocketAddr = bind_value
        .parse()
        .map_err(|source| ConfigError::InvalidBind {
            value: bind_value.clone(),
            source,
        })?;
    let cors_origins = parsed
        .server
        .cors_origins
        .map(|origins| origins.into_vec())
        .unwrap_or_else(|| RestServerConfig::default().cors_origins);
    if cors_origins.iter().any(|origin| origin == "*") {
        return Err(ConfigError::WildcardCorsOrigin);
    }

    debug!(
        backend_count = backends.len(),
        %bind,
        "Configuration validated"
    );

    Ok(super::AppConfig {
        server: RestServerConfig { bind, cors_origins },
        backends,
    })
}
