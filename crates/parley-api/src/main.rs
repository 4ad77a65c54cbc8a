//! Parley - minimal chat-storage HTTP service.

mod cli;
mod http;
mod state;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use parley_infra::config::{load_config, resolve_data_dir, resolve_database_url};
use parley_infra::sqlite::pool::DatabasePool;
use parley_observe::tracing_setup::{init_tracing, shutdown_tracing};
use parley_types::config::ServerConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.otel, cli.log_filter()).context("failed to initialize tracing")?;

    let result = run(cli).await;
    if let Err(e) = &result {
        error!(error = %e, "Parley exited with an error");
    }

    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = resolve_data_dir();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| data_dir.join("config.toml"));

    let mut config = load_config(&config_path).await;
    if let Some(url) = cli.database_url {
        config.database_url = Some(url);
    }
    if config.database_url.is_none() {
        tokio::fs::create_dir_all(&data_dir).await?;
    }
    let database_url = resolve_database_url(&config, &data_dir);

    match cli.command {
        Commands::Migrate => {
            let pool = DatabasePool::new(&database_url).await?;
            pool.close().await;
            info!(database_url = %database_url, "Migrations applied");
        }

        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(&config, &database_url).await?;
        }
    }

    Ok(())
}

async fn serve(config: &ServerConfig, database_url: &str) -> anyhow::Result<()> {
    let state = AppState::init(database_url).await?;
    let router = http::router::build_router(
        state.clone(),
        Duration::from_secs(config.request_timeout_secs),
    );

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, database_url, "Parley API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.db_pool.close().await;
    info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
