//! FLUX Relay library
//!
//! Modules:
//! - `api`: Axum HTTP handlers and shared state used by the binary.
//! - `inference`: Thin client for the hosted image-generation endpoint.
//! - `token`: Credential pool loading and file-backed rotation state.
//! - `limit`: Fixed-window request rate limiting keyed by caller IP.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `InferenceClient`,
//! `TokenPool`, `TokenRotator`, and `RateLimiter`.
pub mod api;
pub mod inference;
pub mod token;
pub mod limit;
pub mod config;
pub mod error;

pub use config::Config;
pub use inference::client::InferenceClient;
pub use limit::RateLimiter;
pub use token::pool::TokenPool;
pub use token::rotator::TokenRotator;
