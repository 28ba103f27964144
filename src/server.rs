//! Server runtime plumbing shared by both binaries
//!
//! Tracing setup, per-request logging, HTTP layers, and the serve loop with
//! graceful shutdown.

use crate::config::Config;
use axum::{extract::Request, middleware::Next, response::Response, Router};
use std::net::SocketAddr;
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span, Instrument};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Initialize the global tracing subscriber
///
/// Honors `RUST_LOG`; defaults to `info` when it is unset or invalid.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Request ID middleware - adds unique ID to each request for tracing
pub async fn request_id_middleware(
    service: &'static str,
    request: Request,
    next: Next,
) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        service,
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    info!(
        service,
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = start.elapsed().as_millis(),
        "Request completed"
    );

    response
}

/// Wrap a service router with the standard middleware stack
pub fn with_http_layers(router: Router, service: &'static str) -> Router {
    router
        // Order matters: request_id should wrap the handler first
        .layer(axum::middleware::from_fn(
            move |request: Request, next: Next| request_id_middleware(service, request, next),
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(move |request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    service,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
}

/// Bind to the configured address and serve until a shutdown signal arrives
pub async fn serve(router: Router, config: &Config, service: &'static str) -> anyhow::Result<()> {
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(service, "🚀 Server running on http://{}", addr);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    axum::serve(listener, with_http_layers(router, service))
        .with_graceful_shutdown(shutdown_signal(service))
        .await?;

    info!(service, "Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal(service: &'static str) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!(service, "Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!(service, "Received SIGTERM, shutting down gracefully...");
        },
    }
}
