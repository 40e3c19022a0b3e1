//! Recipe generation against a local Ollama-compatible inference endpoint.
//!
//! [`prompt`] is pure text processing (no I/O) so the brittle parts --
//! prompt wording and `Tags:` line extraction -- are testable without a
//! network. [`client`] owns the single HTTP call the system makes.

pub mod client;
pub mod prompt;

use std::time::Duration;

pub use client::{GenerateError, OllamaClient};

/// Configuration for the inference endpoint.
///
/// Passed explicitly to [`OllamaClient::new`] rather than read from ambient
/// state, so tests can point the generator at a stub endpoint.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Full URL of the generate endpoint.
    pub endpoint_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Bound on the whole request; expiry is treated as generation failure.
    pub timeout: Duration,
}

impl GeneratorConfig {
    /// Default local Ollama generate endpoint.
    pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
    /// Default model identifier.
    pub const DEFAULT_MODEL: &str = "llama3";

    /// Build a config with the default 90-second request timeout.
    pub fn new(endpoint_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            model: model.into(),
            timeout: Duration::from_secs(90),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ENDPOINT, Self::DEFAULT_MODEL)
    }
}
