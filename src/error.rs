//! Common error type and result alias for the relay.
//!
//! Every failure a handler can see is an `AppError`; the `IntoResponse` impl
//! maps each variant to a status code and a JSON `{"detail": ...}` body.
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level failure talking to the upstream service.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("Image generation failed: status {status}, body: {body}")]
    Upstream { status: u16, body: String },

    /// The credential pool has no entry at the current rotation index.
    #[error("No more tokens available")]
    TokensExhausted,

    /// Caller exceeded the per-window request quota.
    #[error("Rate limit exceeded, retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Token store I/O error: {0}")]
    TokenStore(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({ "detail": self.to_string() }));
        match self {
            AppError::RateLimited { retry_after_secs } => (
                status,
                [(header::RETRY_AFTER, retry_after_secs.to_string())],
                body,
            )
                .into_response(),
            _ => (status, body).into_response(),
        }
    }
}
