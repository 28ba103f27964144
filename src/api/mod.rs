//! API module
//!
//! Contains the routers and HTTP request handlers for both services

pub mod contacts;
pub mod extractors;
pub mod students;

use axum::Json;
use serde::Serialize;

/// Health check response shared by both services
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process is serving
    pub status: String,
    /// Crate version
    pub version: String,
    /// Human-readable message
    pub message: String,
}

/// GET /health - Liveness probe
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Service is healthy".to_string(),
    })
}
