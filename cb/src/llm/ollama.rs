//! Ollama client implementation
//!
//! Talks to a local Ollama server through its native `/api/generate`
//! endpoint with streaming disabled, so each call returns the full reply.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::http::{build_client, decode_json, post_json};
use super::{GenerationError, Generator};
use crate::config::LlmConfig;

/// Ollama API client
pub struct OllamaClient {
    model: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
    timeout: Duration,
}

impl OllamaClient {
    /// Create a new client from configuration
    pub fn from_config(config: &LlmConfig) -> Result<Self, GenerationError> {
        debug!(?config, "from_config: called");
        let timeout = Duration::from_millis(config.timeout_ms);

        Ok(Self {
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: build_client(timeout)?,
            max_tokens: config.max_tokens,
            timeout,
        })
    }

    /// Build the request body for `/api/generate`
    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        debug!(%self.model, prompt_len = prompt.len(), "build_request_body: called");
        serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": {
                "num_predict": self.max_tokens,
            },
        })
    }

    /// Pull the generated text out of a non-streaming reply
    fn parse_response(&self, api_response: OllamaGenerateResponse) -> Result<String, GenerationError> {
        debug!(done = api_response.done, "parse_response: called");
        if let Some(err) = api_response.error {
            return Err(GenerationError::InvalidResponse(err));
        }
        if !api_response.done {
            return Err(GenerationError::InvalidResponse(
                "Ollama returned an unfinished generation".to_string(),
            ));
        }
        Ok(api_response.response)
    }
}

#[async_trait]
impl Generator for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!(%self.model, "generate: called");
        let url = format!("{}/api/generate", self.base_url);
        let body = self.build_request_body(prompt);

        let response = post_json(&self.http, &url, &body, None, self.timeout).await?;
        let api_response: OllamaGenerateResponse = decode_json(response).await?;
        self.parse_response(api_response)
    }
}

#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    #[serde(default)]
    response: String,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    error: Option<String>,
}
