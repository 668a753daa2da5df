//! # StockApi Server
//!
//! Main entry point for the StockApi application.
//!
//! Startup order: configuration, telemetry, cache backend selection, then the
//! HTTP listener. A configured shared cache that cannot be reached stops the
//! process before any request is served.

use stockapi_config::ConfigLoader;
use stockapi_core::{init_telemetry, StockApiError, StockApiResult, TelemetryConfig};
use stockapi_server::{app::App, startup};
use stockapi_service::register_metrics;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> StockApiResult<()> {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.into_config(),
        Err(e) => {
            // Telemetry settings live in the config; fall back to defaults to report this.
            let _ = init_telemetry(&TelemetryConfig::default());
            return Err(e);
        }
    };

    init_telemetry(&config.observability.telemetry())?;
    register_metrics();

    startup::print_banner();
    info!("Starting {} v{}", config.app.name, env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);
    info!("Cache kind: {}", config.cache.kind);

    let app = App::build(&config).await?;
    let cache_backend = app.cache_backend();

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| StockApiError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    startup::print_startup_info(config.server.port, cache_backend);
    info!("Starting REST server on http://{}", addr);

    axum::serve(listener, app.into_router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StockApiError::Internal(format!("REST server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
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
                warn!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
