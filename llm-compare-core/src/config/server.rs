use crate::constants::{DEFAULT_BIND, DEFAULT_CORS_ORIGIN};
use serde::Deserialize;
use std::net::SocketAddr;

/// REST server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestServerConfig {
    pub bind: SocketAddr,
    /// Origins allowed by the CORS layer
    pub cors_origins: Vec<String>,
}

impl Default for RestServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(super) struct RawRestServer {
    pub(super) bind: Option<String>,
    pub(super) cors_origins: Option<CorsOrigins>,
}

/// Origins may be written either as a list or as one comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum CorsOrigins {
    List(Vec<String>),
    Joined(String),
}

impl CorsOrigins {
    pub(super) fn into_vec(self) -> Vec<String> {
        let origins = match self {
            CorsOrigins::List(list) => list,
            CorsOrigins::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        };
        origins
            .into_iter()
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect()
    }
}

pub(super) fn default_bind() -> &'static str {
    DEFAULT_BIND
}
