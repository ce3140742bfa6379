//! REST server entry point
//!
//! Loads the backend configuration, builds the registry and serves the
//! comparison API until the process is stopped.

use clap::Parser;
use llm_compare_core::application::ComparisonEngine;
use llm_compare_core::config::AppConfig;
use llm_compare_core::infrastructure::model::ModelRegistry;
use llm_compare_core::infrastructure::server;
use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "llm-compare", about = "Compare one prompt across several LLM backends")]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// REST API bind address (overrides config if specified)
    #[arg(long)]
    addr: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    init_tracing();
    info!("Starting llm-compare REST server");

    let mut config = AppConfig::load(args.config.as_deref())?;
    debug!(backends = ?config.backend_ids(), "Configuration loaded");

    if let Some(addr) = args.addr {
        config.server.bind = addr;
    }

    let registry = ModelRegistry::from_configs(&config.backends)?;
    info!(backends = registry.len(), "Backend registry ready");
    let engine = Arc::new(ComparisonEngine::new(Arc::new(registry)));

    info!(addr = %config.server.bind, "REST server starting");
    server::serve(engine, &config.server).await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .init();
}
