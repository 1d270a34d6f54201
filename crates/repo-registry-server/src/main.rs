//! Repository Registry Server binary.
//!
//! Loads `registry.toml`, applies command-line overrides, and serves the
//! registry until Ctrl-C.

use anyhow::Context;
use clap::Parser;
use repo_registry_server::{router, AppState, ServerConfig};
use std::path::PathBuf;
use tokio::signal;

/// Repository Registry Server - In-memory repository records over HTTP.
#[derive(Parser, Debug)]
#[command(name = "repo-registry-server")]
#[command(about = "Serves an in-memory registry of repositories over HTTP")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to bind (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level: trace, debug, info, warn, or error (overrides the config file)
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    /// Load the configuration file and apply the command-line overrides.
    fn resolve_config(&self) -> anyhow::Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load_from(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => ServerConfig::load().context("loading registry.toml")?,
        };
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        Ok(config)
    }
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl+c: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.resolve_config()?;

    tracing_subscriber::fmt()
        .with_max_level(config.level()?)
        .init();

    let app = router(AppState::new());

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("binding {}:{}", config.host, config.port))?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
