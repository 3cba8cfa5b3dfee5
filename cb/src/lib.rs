//! Chatbot - terminal chat loop for local and hosted LLMs
//!
//! Reads one line at a time, sends it to a model together with everything
//! said so far, and prints the reply. The conversation lives only in memory
//! and is gone when the process exits.
//!
//! # Modules
//!
//! - [`session`] - The conversation loop
//! - [`transcript`] - Append-only record of exchanges
//! - [`prompts`] - Handlebars prompt templates
//! - [`llm`] - `Generator` trait plus Ollama and OpenAI clients
//! - [`input`] - Line sources (rustyline, piped stdin)
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use chatbot::{ChatSession, Config, PromptLoader, create_generator};
//!
//! let config = Config::load(None)?;
//! let generator = create_generator(&config.llm)?;
//! let mut session = ChatSession::new(generator, PromptLoader::embedded_only(), &config.session);
//! ```

pub mod cli;
pub mod config;
pub mod input;
pub mod llm;
pub mod prompts;
pub mod session;
pub mod transcript;

pub use config::{Config, LlmConfig, OnError, SessionConfig};
pub use input::{LineSource, PlainInput, ReadOutcome};
pub use llm::{GenerationError, Generator, OllamaClient, OpenAIClient, create_generator};
pub use prompts::{PromptLoader, PromptVars};
pub use session::{ChatSession, EndReason, SessionState, SessionSummary};
pub use transcript::{Speaker, Transcript, Turn};
