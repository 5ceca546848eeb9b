//! Thin HTTP client for the hosted image-generation endpoint.
//!
//! `generate` posts `{"inputs": "<prompt>"}` with a bearer token and returns
//! the response body as opaque image bytes. The payload is never inspected;
//! format and size validation belong to the upstream service.
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use crate::error::{AppResult, AppError};

#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    endpoint_url: String,
}

impl InferenceClient {
    /// Build a client against `endpoint_url` with a bounded request timeout.
    pub fn new(endpoint_url: String, timeout: Duration) -> AppResult<Self> {
        let url = endpoint_url.trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AppError::HttpClient)?;
        Ok(InferenceClient { client, endpoint_url: url })
    }

    /// Generate an image for `prompt` using `token` as the bearer credential.
    ///
    /// Success is exactly an HTTP-success status from the upstream; the body
    /// is returned verbatim. Non-success statuses become `AppError::Upstream`
    /// carrying the status and response text so the caller can decide whether
    /// to rotate credentials.
    pub async fn generate(&self, prompt: &str, token: &str) -> AppResult<Vec<u8>> {
        tracing::debug!("Sending prompt to inference endpoint at URL: {}", self.endpoint_url);

        let response = self.client.post(&self.endpoint_url)
            .bearer_auth(token)
            .json(&json!({ "inputs": prompt }))
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            let bytes = response.bytes().await.map_err(AppError::HttpClient)?;
            tracing::info!("Upstream returned {} image bytes", bytes.len());
            Ok(bytes.to_vec())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            tracing::error!("Upstream call failed. Status: {}, Body: {}", status, body);
            Err(AppError::Upstream { status: status.as_u16(), body })
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}
