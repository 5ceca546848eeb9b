//! Axum request handlers for the HTTP API.
use axum::extract::{ConnectInfo, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::routes::AppState;
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    pub prompt: String,
}

/// Liveness probe. Answers a constant body so an external host keeps the
/// process warm; no side effects.
pub async fn keep_alive() -> Json<serde_json::Value> {
    Json(json!({ "gg": "gg" }))
}

/// Relay a prompt to the upstream model and stream the image bytes back.
///
/// Flow: rate-limit gate, one attempt with the current token, and on failure
/// exactly one rotate-and-retry. Exhaustion of the pool or a failed retry
/// surfaces as a 500 with the diagnostic in the body.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Query(params): Query<GenerateParams>,
) -> AppResult<impl IntoResponse> {
    state
        .rate_limiter
        .check(addr.ip(), "generate")
        .await
        .map_err(|retry_after| AppError::RateLimited {
            retry_after_secs: retry_after.as_secs().max(1),
        })?;

    let request_id = Uuid::new_v4();
    tracing::info!(
        "[{}] generate request from {}, prompt length {}",
        request_id,
        addr.ip(),
        params.prompt.len()
    );

    let token = state.token_rotator.current().await.ok_or(AppError::TokensExhausted)?;

    let image_bytes = match state.inference_client.generate(&params.prompt, &token).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("[{}] token expired or error: {}", request_id, e);
            let next = state
                .token_rotator
                .advance()
                .await?
                .ok_or(AppError::TokensExhausted)?;
            state.inference_client.generate(&params.prompt, &next).await?
        }
    };

    tracing::info!("[{}] responding with {} bytes", request_id, image_bytes.len());
    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CONTENT_DISPOSITION, "inline; filename=img.png"),
        ],
        image_bytes,
    ))
}
