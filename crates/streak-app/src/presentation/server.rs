use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::presentation::routes;
use crate::presentation::state::{AppState, SharedState};
use streak_infrastructure::config::ServerConfig;

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/check-in", post(routes::check_in))
        .route("/streak", get(routes::get_streak))
        .route("/calendar", get(routes::get_calendar))
        .route("/missed-days", get(routes::get_missed_days))
        .route("/health", get(routes::health))
        .route("/test-checkin", post(routes::simulate_check_in))
        .route("/test-reset", post(routes::reset))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind to the configured address and serve until SIGINT/SIGTERM
pub async fn serve(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let address = config.bind_address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    serve_with_shutdown(listener, Arc::new(state), shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    state: SharedState,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let address = listener.local_addr().context("listener has no address")?;
    info!("🚀 Streak tracker running on {address}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    info!("Server shut down");
    Ok(())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
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
}
