//! CLI argument parsing for the chatbot

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Chatbot - talk to a local or hosted LLM from the terminal
#[derive(Parser, Debug)]
#[command(name = "cb")]
#[command(author, version, about = "Terminal chat loop for local and hosted LLMs", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// LLM provider (ollama, openai); overrides the config file
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Model name; overrides the config file
    #[arg(short, long)]
    pub model: Option<String>,

    /// API base URL; overrides the config file
    #[arg(short = 'u', long = "base-url")]
    pub base_url: Option<String>,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(provider) = &self.provider {
            config.llm.provider = provider.clone();
        }
        if let Some(model) = &self.model {
            config.llm.model = model.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.llm.base_url = base_url.clone();
        }
    }
}
