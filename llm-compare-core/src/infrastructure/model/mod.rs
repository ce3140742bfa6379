//! Model infrastructure module
//!
//! Provides LLM backend clients and the registry the comparison engine reads.
//!
//! # Structure
//! - `types` - Request, Response, Error types
//! - `traits` - ModelClient trait
//! - `registry` - ModelRegistry mapping backend names to clients
//! - `adapter` - Message format adapters
//! - `rate_limit` - Rate-limit header extraction
//! - `factory` - Provider factory for creating clients
//! - `clients` - Individual client implementations

#[cfg(feature = "http-providers")]
pub mod adapter;
#[cfg(feature = "http-providers")]
pub mod clients;
#[cfg(feature = "http-providers")]
pub mod factory;
#[cfg(feature = "http-providers")]
pub mod rate_limit;
pub mod registry;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use registry::{ModelRegistry, ModelRegistryBuilder};
pub use traits::ModelClient;
pub use types::{ModelError, ModelRequest, ModelResponse};
