//! OpenAI-compatible client implementation
//!
//! Sends the rendered prompt as a single user message to a Chat Completions
//! endpoint. Works against OpenAI itself and against servers that mirror its
//! API (Ollama's `/v1`, vLLM, llama.cpp server).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::http::{build_client, decode_json, post_json};
use super::{GenerationError, Generator};
use crate::config::LlmConfig;

/// OpenAI API client
pub struct OpenAIClient {
    model: String,
    api_key: Option<String>,
    base_url: String,
    http: Client,
    max_tokens: u32,
    timeout: Duration,
}

impl OpenAIClient {
    /// Create a new client from configuration
    pub fn from_config(config: &LlmConfig) -> Result<Self, GenerationError> {
        debug!(?config, "from_config: called");
        let api_key = config
            .api_key()
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;
        let timeout = Duration::from_millis(config.timeout_ms);

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: build_client(timeout)?,
            max_tokens: config.max_tokens,
            timeout,
        })
    }

    /// Build the request body for the Chat Completions API
    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        debug!(%self.model, %self.max_tokens, "build_request_body: called");

        let mut body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt },
            ],
        });

        // GPT-5.x and o-series models use max_completion_tokens instead of max_tokens
        let uses_completion_tokens =
            self.model.starts_with("gpt-5") || self.model.starts_with("o1") || self.model.starts_with("o3");

        if uses_completion_tokens {
            body["max_completion_tokens"] = serde_json::json!(self.max_tokens);
        } else {
            body["max_tokens"] = serde_json::json!(self.max_tokens);
        }

        body
    }

    /// Parse the first choice's text
    fn parse_response(&self, api_response: OpenAIResponse) -> Result<String, GenerationError> {
        debug!(choice_count = api_response.choices.len(), "parse_response: called");
        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| GenerationError::InvalidResponse("Response contained no message content".to_string()))
    }
}

#[async_trait]
impl Generator for OpenAIClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!(%self.model, "generate: called");
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = self.build_request_body(prompt);

        let response = post_json(&self.http, &url, &body, self.api_key.as_deref(), self.timeout).await?;
        let api_response: OpenAIResponse = decode_json(response).await?;
        self.parse_response(api_response)
    }
}

// OpenAI API response types

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAIMessage {
    content: Option<String>,
}
