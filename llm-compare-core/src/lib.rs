//! Send one prompt to several LLM backends at once and collect comparable
//! answers with normalized metadata.

pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{CompareError, ComparisonEngine};
pub use config::{AppConfig, BackendConfig, ConfigError};
pub use domain::{ComparisonRequest, ComparisonResult, ModelResult, ResponseMetadata};
pub use infrastructure::model;
#[cfg(feature = "server")]
pub use infrastructure::server;
