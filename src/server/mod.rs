//! HTTP server for on-demand checks
//!
//! Routes:
//! - `GET /` - the check form
//! - `POST /api/check` - run a check, `{"url": "..."}` in, report out
//! - `GET /health` - liveness probe

mod error;
mod routes;

pub use error::ApiError;
pub use routes::CheckRequest;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::checker::Checker;
use crate::config::Config;
use crate::AuditError;

/// State shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub checker: Checker,
}

/// Builds the router with all routes and layers
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route("/api/check", post(routes::check))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Converts a handler panic into the same 500 JSON shape as other failures
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Internal server error".to_string()
    };

    ApiError::Internal(message).into_response()
}

/// Binds the configured address and serves until Ctrl+C
pub async fn serve(config: &Config) -> crate::Result<()> {
    let addr = config.server.bind_addr()?;
    let checker = Checker::new(config.fetcher.clone())?;
    let router = build_router(AppState { checker });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| AuditError::Bind { addr, source })?;
    tracing::info!("Site-Audit listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received shutdown signal"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
