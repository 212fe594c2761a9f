//! HTTP client for the Ollama `/api/generate` endpoint.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

const STOP_SEQUENCES: [&str; 4] = ["Human:", "Assistant:", "User:", "Bot:"];
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum GenerationError {
    /// The endpoint answered 2xx without a usable `response` field.
    #[error("Generation endpoint returned no response text")]
    MissingResponse,

    #[error("Generation endpoint returned status {0}")]
    Status(StatusCode),

    /// Connection failure, protocol error or timeout.
    #[error("Generation endpoint unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    temperature: f32,
    top_p: f32,
    top_k: u32,
    repeat_penalty: f32,
    num_predict: u32,
    stop: [&'a str; 4],
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// Non-streaming text generation against a single model.
#[derive(Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    url: Url,
    model: String,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(http: reqwest::Client, url: Url, model: String) -> Self {
        Self {
            http,
            url,
            model,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets how long a generation call may take before it fails as a transport error.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends `prompt` and returns the generated text.
    ///
    /// # Returns
    /// - `Ok(String)` - Value of the `response` field
    /// - `Err(GenerationError::Status)` - Non-2xx status
    /// - `Err(GenerationError::MissingResponse)` - Body lacks a string `response`
    /// - `Err(GenerationError::Transport)` - Connection or protocol failure
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            temperature: 0.2,
            top_p: 0.95,
            top_k: 50,
            repeat_penalty: 1.2,
            num_predict: 200,
            stop: STOP_SEQUENCES,
        };

        let response = self
            .http
            .post(self.url.clone())
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Status(status));
        }

        let parsed: GenerateResponse = response.json().await.map_err(|e| {
            tracing::warn!("Unreadable generation response: {}", e);
            GenerationError::MissingResponse
        })?;

        parsed.response.ok_or(GenerationError::MissingResponse)
    }
}
