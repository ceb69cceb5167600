//! Serve command - runs the HTTP service

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::api::{create_router, AppState};
use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::observability::{
    create_metrics_router, init_metrics, init_tracing, shutdown_tracing, PrometheusMetrics,
};

/// Run the HTTP service until Ctrl+C or SIGTERM
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = load_config();
    init_observability(&config);

    let state = crate::create_app_state_with_config(&config).await?;
    let metrics = init_metrics(&config.observability.metrics);
    let app = build_app(state, metrics, &config.observability.metrics.path);

    let addr = build_socket_addr(&config)?;
    info!("Starting fact-check service on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_tracing();
    info!("Fact-check service shutdown complete");

    Ok(())
}

fn load_config() -> AppConfig {
    match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            // Logging is not up yet
            eprintln!("Failed to load configuration, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

fn init_observability(config: &AppConfig) {
    init_tracing(
        &logging::LoggingConfig {
            level: config.logging.level.clone(),
            format: config.logging.format.clone(),
        },
        &config.observability.tracing,
    );
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
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
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

/// API router plus the metrics endpoint when enabled
fn build_app(state: AppState, metrics: Option<PrometheusMetrics>, metrics_path: &str) -> Router {
    let router = create_router(state);

    match metrics {
        Some(m) => router.merge(create_metrics_router(m, metrics_path)),
        None => router,
    }
}
