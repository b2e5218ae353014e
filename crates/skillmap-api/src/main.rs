//! CLI entry point for the skillmap-api HTTP service.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use skillmap_api::state::AppState;
use skillmap_api::{config, routes};
use skillmap_graph::GraphClient;

#[derive(Parser)]
#[command(name = "skillmap-api")]
#[command(about = "Read-only HTTP API over the skill roadmap graph")]
struct Cli {
    /// Config file prefix (default: skillmap).
    #[arg(short, long, default_value = "skillmap")]
    config: String,

    /// Override the listen port from config.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let cfg = config::load(&cli.config);
    let port = cli.port.unwrap_or(cfg.http.port);

    // An unreachable store at boot must not prevent the process from coming
    // up: the health check stays green and data routes answer 500 until the
    // service is restarted with a reachable store.
    let graph = match GraphClient::connect(&cfg.graph).await {
        Ok(client) => {
            tracing::info!("Graph store initialized");
            Some(client)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize graph store, serving degraded");
            None
        }
    };

    let state = Arc::new(AppState::new(graph));
    let app = routes::router(state, &cfg.http.url_prefix);

    let listener = tokio::net::TcpListener::bind((cfg.http.bind.as_str(), port)).await?;
    tracing::info!(bind = %cfg.http.bind, port, prefix = %cfg.http.url_prefix, "Skillmap API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Skillmap API stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
