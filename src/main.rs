use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::{error, info};

use tds_virtual_ta::{
    config::{Config, Environment, SERVICE_INFO},
    create_router,
    matcher::{KeywordMatcher, QuestionMatcher},
    middleware::init_tracing,
};

#[tokio::main]
async fn main() {
    // Initialize structured logging before anything else can fail
    let environment = Environment::from_env();
    if let Err(e) = init_tracing(&environment) {
        eprintln!("Failed to initialize tracing: {}", e);
        std::process::exit(1);
    }

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    info!(
        version = SERVICE_INFO.version,
        environment = ?config.environment,
        "Starting {}: {}",
        SERVICE_INFO.title,
        SERVICE_INFO.description
    );

    let matcher: Arc<dyn QuestionMatcher> = Arc::new(KeywordMatcher::default());

    // Create the Axum router with all endpoints
    let app = create_router(matcher, config.request_timeout);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            info!("Server listening on {}", addr);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Start the server with graceful shutdown handling
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Resolves on SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, initiating graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, initiating graceful shutdown");
        },
    }
}
