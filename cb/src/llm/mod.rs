//! LLM module for the chatbot
//!
//! Provides the `Generator` abstraction and concrete provider clients.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod http;
mod ollama;
mod openai;

pub use client::Generator;
pub use error::GenerationError;
pub use ollama::OllamaClient;
pub use openai::OpenAIClient;

use crate::config::LlmConfig;

/// Create a generator for the provider named in config
///
/// Supports "ollama" and "openai" providers.
pub fn create_generator(config: &LlmConfig) -> Result<Arc<dyn Generator>, GenerationError> {
    debug!(provider = %config.provider, model = %config.model, "create_generator: called");
    match config.provider.as_str() {
        "ollama" => {
            debug!("create_generator: creating Ollama client");
            Ok(Arc::new(OllamaClient::from_config(config)?))
        }
        "openai" => {
            debug!("create_generator: creating OpenAI client");
            Ok(Arc::new(OpenAIClient::from_config(config)?))
        }
        other => {
            debug!(provider = %other, "create_generator: unknown provider");
            Err(GenerationError::InvalidResponse(format!(
                "Unknown LLM provider: '{}'. Supported: ollama, openai",
                other
            )))
        }
    }
}
