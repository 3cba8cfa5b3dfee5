//! Chatbot - terminal chat loop
//!
//! CLI entry point: loads config, builds the model client, runs one session.

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use rustyline::DefaultEditor;
use tracing::{debug, info};

use chatbot::cli::Cli;
use chatbot::config::Config;
use chatbot::input::PlainInput;
use chatbot::llm::create_generator;
use chatbot::prompts::PromptLoader;
use chatbot::session::{ChatSession, EndReason};

fn parse_level(s: &str) -> Option<tracing::Level> {
    match s.to_uppercase().as_str() {
        "TRACE" => Some(tracing::Level::TRACE),
        "DEBUG" => Some(tracing::Level::DEBUG),
        "INFO" => Some(tracing::Level::INFO),
        "WARN" | "WARNING" => Some(tracing::Level::WARN),
        "ERROR" => Some(tracing::Level::ERROR),
        _ => None,
    }
}

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Logs go to a file so they never interleave with the conversation
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chatbot")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => parse_level(s).unwrap_or_else(|| {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
            tracing::Level::INFO
        }),
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("chatbot.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);

    info!(provider = %config.llm.provider, model = %config.llm.model, "chatbot starting");

    let generator = create_generator(&config.llm).map_err(|e| eyre::eyre!("Failed to create LLM client: {}", e))?;
    let prompts = PromptLoader::new(std::env::current_dir()?);
    let mut session = ChatSession::new(generator, prompts, &config.session);

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let summary = if io::stdin().is_terminal() {
        debug!("main: stdin is a terminal, using readline");
        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
        session.run(&mut rl, &mut stdout, &mut stderr).await?
    } else {
        debug!("main: stdin is not a terminal, reading plain lines");
        let mut input = PlainInput::new(io::stdin().lock());
        session.run(&mut input, &mut stdout, &mut stderr).await?
    };

    if summary.reason == EndReason::GenerationFailed {
        return Err(eyre::eyre!("Session aborted after a failed model call"));
    }

    Ok(())
}
