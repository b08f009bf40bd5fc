//! # Roster Server
//!
//! Main entry point for the Roster user-listing service.

use roster_config::{AppConfig, ConfigLoader, LogConfig};
use roster_core::RosterResult;
use roster_repository::{create_pool, MySqlUserRepository};
use roster_rest::{create_router, AppState};
use roster_service::UserServiceImpl;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

mod startup;

#[tokio::main]
async fn main() {
    // Configuration is loaded before logging so the subscriber can honor
    // the configured level and format.
    let config_loader = match ConfigLoader::from_default_location() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    let config = config_loader.get().await;

    init_logging(&config.log);

    info!("Starting Roster server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = serve(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: AppConfig) -> RosterResult<()> {
    // Create database pool
    let db_pool = create_pool(&config.database).await?;

    // Run migrations
    db_pool.run_migrations().await?;

    // Wire the layers
    let user_repository = Arc::new(MySqlUserRepository::new(db_pool.clone()));
    let user_service = Arc::new(UserServiceImpl::new(user_repository));
    let app_state = AppState::new(user_service);

    // Create the router
    let router = create_router(app_state, &config.server);

    // Start the HTTP server
    let addr = config.server.addr();
    startup::print_startup_info(&config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| roster_core::RosterError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| roster_core::RosterError::Internal(format!("Server error: {}", e)))?;

    db_pool.close().await;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging(log_config: &LogConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let default_filter = format!("{},roster=debug,tower_http=debug", log_config.level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(filter);

    if log_config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
