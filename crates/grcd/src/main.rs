//! GRC AI Engine daemon entry point.

use anyhow::Result;
use grc_common::EngineConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("GRC AI Engine v{} starting", env!("CARGO_PKG_VERSION"));

    let config = EngineConfig::load();
    grcd::server::run(config).await
}
