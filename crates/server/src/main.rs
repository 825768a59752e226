//! Pantry server - in-memory catalog and notification API.
//!
//! This binary serves the catalog API on port 8000.
//!
//! # Architecture
//!
//! - Axum web framework with JSON request/response bodies
//! - In-memory item store seeded with a fixed sample catalog
//! - Background writer task appending notification log lines after
//!   responses have gone out
//!
//! Nothing is persisted across restarts; the notification log file is the
//! only artifact the process leaves behind.

#![cfg_attr(not(test), forbid(unsafe_code))]
// The binary re-includes the library modules; not every library item is
// reachable from main
#![allow(dead_code)]

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod extract;
mod notify;
mod routes;
mod state;
mod store;

use config::ServerConfig;
use notify::NotificationLog;
use state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pantry_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Spawn the notification log writer; the handle lives in AppState
    let (notifications, _writer) = NotificationLog::spawn(config.notification_log.clone());
    tracing::info!(
        path = %config.notification_log.display(),
        "Notification log writer started"
    );

    // Build application state (store seeded with the sample catalog)
    let state = AppState::new(config.clone(), notifications);
    tracing::info!(items = state.store().len(), "Item store seeded");

    // Build router
    let app = Router::new()
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("pantry server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
