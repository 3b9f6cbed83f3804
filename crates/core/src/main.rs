//! improv-server: serve the prompt API until interrupted

use std::sync::Arc;

use anyhow::Context;
use improv_core::{server, MemStore, ServerConfig, SharedStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let store: SharedStore = if config.seed {
        Arc::new(MemStore::seeded())
    } else {
        tracing::warn!("Seeding disabled; starting with an empty prompt store");
        Arc::new(MemStore::new())
    };

    let handle = server::start(&config, store)
        .await
        .with_context(|| format!("Failed to bind {}", config.socket_addr()))?;

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    tracing::info!("Shutting down");
    handle.stop().await;

    Ok(())
}
