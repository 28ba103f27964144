//! Custom extractors
//!
//! Provides a lenient JSON body extractor with the services' error handling.

use crate::error::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// JSON body extractor that tolerates missing bodies
///
/// The body is only parsed when the `Content-Type` mentions JSON and the body
/// is non-empty; otherwise the payload's `Default` (every field absent) is
/// used, so field-level validation reports what is missing. Only JSON objects
/// populate fields: an array body also yields the `Default`, and a bare
/// scalar or a body that fails to parse is rejected with
/// [`AppError::MalformedBody`].
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|content_type| content_type.to_ascii_lowercase().contains("json"));

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;

        if !is_json || bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Self(T::default()));
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|err| AppError::MalformedBody(err.to_string()))?;

        match value {
            Value::Object(_) => serde_json::from_value(value)
                .map(Self)
                .map_err(|err| AppError::MalformedBody(err.to_string())),
            // Arrays carry no named fields
            Value::Array(_) => Ok(Self(T::default())),
            _ => Err(AppError::MalformedBody(
                "JSON body must be an object or an array".to_string(),
            )),
        }
    }
}
