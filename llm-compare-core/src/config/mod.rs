pub mod app;
pub mod backend;
pub mod error;
pub mod loader;
pub mod server;

pub use crate::constants::CONFIG_PATH;
pub use app::AppConfig;
pub use backend::BackendConfig;
pub use error::ConfigError;
pub use server::RestServerConfig;
