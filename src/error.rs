//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! The students API reports failures inside its `success`/`message` envelope,
//! while the contacts API and transport-level failures use a flat `error` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// All errors that can occur in either service are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Student payload failed validation; carries every message found
    #[error("Validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),

    /// Student with the given ID was not found
    #[error("Student not found: {0}")]
    StudentNotFound(String),

    /// Contact payload failed validation
    #[error("{0}")]
    InvalidContact(String),

    /// Request body claimed to be JSON but could not be parsed
    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::StudentNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidContact(_) => StatusCode::BAD_REQUEST,
            AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let description = self.to_string();

        let body = match self {
            AppError::Validation(errors) => json!({
                "success": false,
                "message": "Validation failed",
                "errors": errors,
            }),
            AppError::StudentNotFound(_) => json!({
                "success": false,
                "message": "Student not found",
            }),
            AppError::InvalidContact(message) => json!({ "error": message }),
            AppError::MalformedBody(_) | AppError::Internal(_) => {
                if status.is_server_error() {
                    tracing::error!(error = %description, "Unhandled error while serving request");
                }
                json!({
                    "error": description,
                    "status": status.as_u16(),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}
