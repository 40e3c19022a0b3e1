//! HTTP client for the Ollama generate API.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::GeneratorConfig;

/// A recipe generation failure.
///
/// There is deliberately no retry or backoff anywhere: any failure aborts
/// the current generation and, within a day-plan, the whole plan.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Network error or timeout before a response arrived.
    #[error("request to inference endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("inference endpoint returned HTTP {0}")]
    Endpoint(StatusCode),
    /// The body was not JSON with a string `response` field.
    #[error("inference endpoint returned a malformed body (no `response` field)")]
    MalformedBody,
}

/// Request body for the non-streaming generate call.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// The single field we need from the response body.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// Client for a local Ollama-compatible inference endpoint.
///
/// Holds a configured [`reqwest::Client`]; the config's timeout is the only
/// timeout in the system.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    config: GeneratorConfig,
}

impl OllamaClient {
    /// Build a client from the given configuration.
    pub fn new(config: GeneratorConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// The endpoint URL this client talks to.
    pub fn endpoint_url(&self) -> &str {
        &self.config.endpoint_url
    }

    /// Send one non-streaming generate request and return the raw text.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let payload = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };

        debug!(
            endpoint = %self.config.endpoint_url,
            model = %self.config.model,
            prompt_len = prompt.len(),
            "sending generate request"
        );

        let response = self
            .http
            .post(&self.config.endpoint_url)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Endpoint(status));
        }

        let body: GenerateResponse =
            response.json().await.map_err(|_| GenerateError::MalformedBody)?;

        body.response.ok_or(GenerateError::MalformedBody)
    }
}
