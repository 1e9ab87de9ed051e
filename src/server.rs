//! HTTP server assembly

use axum::{
    middleware::map_response,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tracing::info;

use crate::handlers::{error::route_not_found, events, health, users, AppState};
use crate::middleware::{http_trace_layer, json_method_not_allowed};
use crate::utils::errors::Result;

/// Build the application router over the given state
pub fn build_router(state: AppState) -> Router {
    let events_router = Router::new()
        .route("/", post(events::create_event))
        .route("/upcoming", get(events::list_upcoming))
        .route("/user", post(users::create_user))
        .route("/:id", get(events::get_event))
        .route("/:id/register", post(events::register))
        .route("/:id/cancel", post(events::cancel))
        .route("/:id/stats", get(events::stats));

    Router::new()
        .route("/", get(health::liveness))
        .route("/health", get(health::health))
        .nest("/events", events_router)
        .fallback(route_not_found)
        .layer(map_response(json_method_not_allowed))
        .layer(http_trace_layer())
        .with_state(state)
}

/// Serve `router` until Ctrl-C or SIGTERM
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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
