//! serve CLI command: the signal radar daemon.
//!
//! Wires the Hyperliquid client, the signal engine, and the shared cache
//! together, then runs the background refresher and the web API until a
//! shutdown signal arrives.

use anyhow::Result;
use clap::Args;
use perp_radar_core::ConfigLoader;
use perp_radar_hyperliquid::HyperliquidClient;
use perp_radar_signals::SignalEngine;
use perp_radar_web_api::{ApiServer, AppState, SignalCache, SignalRefresher};
use std::sync::Arc;
use std::time::Duration;

/// Arguments for the serve command.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Config file path
    #[arg(short, long, default_value = "config/Config.toml")]
    pub config: String,
}

/// Runs the radar daemon until SIGINT or SIGTERM.
///
/// # Errors
/// Returns an error if the config cannot be loaded or the HTTP client
/// cannot be constructed.
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting signal radar daemon with config: {}", args.config);

    let config = ConfigLoader::load_from(&args.config)?;

    let client = HyperliquidClient::new(config.hyperliquid.api_url.clone())?;
    let engine = SignalEngine::default().with_top_n(config.radar.top_n);
    let cache = Arc::new(SignalCache::new());

    let state = AppState {
        cache: cache.clone(),
        builder_address: config.radar.builder_address.clone(),
        refresh_interval_secs: config.radar.refresh_interval_secs,
    };

    let refresher = SignalRefresher::new(
        client,
        engine,
        cache,
        Duration::from_secs(config.radar.refresh_interval_secs),
    );
    let refresher_handle = tokio::spawn(refresher.run());

    let server = ApiServer::new(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.serve(&addr).await {
            tracing::error!("Server error: {}", e);
        }
    });

    shutdown_signal().await;

    refresher_handle.abort();
    server_handle.abort();

    tracing::info!("Signal radar daemon stopped");
    Ok(())
}

/// Resolves when SIGTERM or SIGINT is received.
async fn shutdown_signal() {
    let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        .expect("Failed to create SIGTERM handler");

    let mut sigint = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())
        .expect("Failed to create SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
        _ = sigint.recv() => {
            tracing::info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
        }
    }
}
