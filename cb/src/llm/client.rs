//! Generator trait definition

use async_trait::async_trait;

use super::GenerationError;

/// Text generation backend
///
/// Takes a fully rendered prompt and returns the model's reply. Calls are
/// independent; any conversation history must already be in the prompt.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate a reply, waiting until the model has finished
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
