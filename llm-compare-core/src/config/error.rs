use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no backends configured - at least one [[backends]] entry is required")]
    NoBackendsConfigured,

    #[error("backend '{backend}' is declared more than once")]
    DuplicateBackend { backend: String },

    #[error("backend '{backend}' is missing required field 'endpoint'")]
    MissingEndpoint { backend: String },

    #[error("backend '{backend}' is missing required field 'model'")]
    MissingModel { backend: String },

    #[error("wildcard CORS origin '*' cannot be combined with credentials; list origins explicitly")]
    WildcardCorsOrigin,

    #[error("invalid server bind address '{value}': {source}")]
    InvalidBind {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}
