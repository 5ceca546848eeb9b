//! Shared application state and router construction.
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::inference::client::InferenceClient;
use crate::limit::RateLimiter;
use crate::token::rotator::TokenRotator;

pub struct AppState {
    pub inference_client: InferenceClient,
    pub token_rotator: TokenRotator,
    pub rate_limiter: RateLimiter,
}

/// Build the relay router over `state`. Split out of `main` so tests can
/// drive the router directly.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::keep_alive))
        .route("/generate", post(handlers::generate))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
