//! File-backed rotation state over the credential pool.
//!
//! The persisted record is a single JSON object `{"current_token": <int>}`
//! read once at load time and rewritten on every `advance`. In-process access
//! is serialized behind a mutex; the file itself carries no cross-process
//! lock, last writer wins.
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::Mutex;

use crate::error::AppResult;
use crate::token::pool::TokenPool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationState {
    pub current_token: u32,
}

impl Default for RotationState {
    fn default() -> Self {
        RotationState { current_token: 1 }
    }
}

pub struct TokenRotator {
    pool: TokenPool,
    track_path: PathBuf,
    state: Mutex<RotationState>,
}

impl TokenRotator {
    /// Load persisted rotation state from `track_path`. A missing or
    /// unreadable record starts the rotation at token 1.
    pub async fn load(pool: TokenPool, track_path: impl Into<PathBuf>) -> Self {
        let track_path = track_path.into();
        let state = match tokio::fs::read_to_string(&track_path).await {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(
                    "Invalid rotation record in {}: {}, starting at token 1",
                    track_path.display(),
                    e
                );
                RotationState::default()
            }),
            Err(_) => RotationState::default(),
        };
        tracing::info!("Rotation state loaded: current token index {}", state.current_token);
        TokenRotator { pool, track_path, state: Mutex::new(state) }
    }

    /// Credential at the current index, if the pool still has one.
    pub async fn current(&self) -> Option<String> {
        let state = self.state.lock().await;
        self.pool.get(state.current_token).map(|s| s.to_string())
    }

    pub async fn current_index(&self) -> u32 {
        self.state.lock().await.current_token
    }

    /// Move to the next token and persist the record before returning.
    ///
    /// The index advances by exactly one even when it runs off the end of the
    /// pool; `None` means exhaustion. The write completes before any retry is
    /// attempted with the resolved token.
    pub async fn advance(&self) -> AppResult<Option<String>> {
        let mut state = self.state.lock().await;
        state.current_token += 1;
        self.persist(&state).await?;
        tracing::info!("Rotated to token index {}", state.current_token);
        Ok(self.pool.get(state.current_token).map(|s| s.to_string()))
    }

    pub fn pool(&self) -> &TokenPool {
        &self.pool
    }

    async fn persist(&self, state: &RotationState) -> AppResult<()> {
        let raw = serde_json::to_string(state)?;
        tokio::fs::write(&self.track_path, raw).await?;
        Ok(())
    }
}
