//! Conversation session
//!
//! One session reads a line, renders it together with the transcript into the
//! chat prompt, asks the generator for a reply, prints it, and records the
//! exchange. Everything is strictly sequential: the next line is not read
//! until the current reply (or failure) has been handled.

use std::io::Write;
use std::sync::Arc;

use colored::Colorize;
use eyre::Result;
use tracing::{debug, info, warn};

use crate::config::{OnError, SessionConfig};
use crate::input::{LineSource, ReadOutcome};
use crate::llm::Generator;
use crate::prompts::{PromptLoader, PromptVars};
use crate::transcript::Transcript;

/// Label printed in front of every model reply
pub const REPLY_LABEL: &str = "Bot:";

/// Prompt shown when waiting for the user
pub const INPUT_PROMPT: &str = "You: ";

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Terminated,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The user typed the exit keyword
    ExitKeyword,
    /// Input closed (Ctrl+D or end of piped stdin)
    EndOfInput,
    /// A generation call failed under the `abort` policy
    GenerationFailed,
}

/// What happened over the course of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub exchanges: usize,
    pub failed_turns: usize,
    pub reason: EndReason,
}

/// Interactive chat session
pub struct ChatSession {
    generator: Arc<dyn Generator>,
    prompts: PromptLoader,
    transcript: Transcript,
    exit_keyword: String,
    on_error: OnError,
    state: SessionState,
}

impl ChatSession {
    /// Create a new session with an empty transcript
    pub fn new(generator: Arc<dyn Generator>, prompts: PromptLoader, config: &SessionConfig) -> Self {
        debug!(exit_keyword = %config.exit_keyword, on_error = ?config.on_error, "ChatSession::new: called");
        Self {
            generator,
            prompts,
            transcript: Transcript::new(),
            exit_keyword: config.exit_keyword.to_lowercase(),
            on_error: config.on_error,
            state: SessionState::AwaitingInput,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Does this raw line end the session?
    pub fn is_exit(&self, input: &str) -> bool {
        input.to_lowercase() == self.exit_keyword
    }

    /// Render the chat prompt for `question` against the current transcript
    pub fn render_prompt(&self, question: &str) -> Result<String> {
        self.prompts
            .render_chat(&PromptVars::new(self.transcript.render(), question))
    }

    /// Run the session until the exit keyword, end of input, or an aborting failure
    ///
    /// Replies go to `out`; generation failures are reported on `err`.
    pub async fn run<I, O, E>(&mut self, input: &mut I, out: &mut O, err: &mut E) -> Result<SessionSummary>
    where
        I: LineSource,
        O: Write,
        E: Write,
    {
        if self.state == SessionState::Terminated {
            return Err(eyre::eyre!("Session has already terminated"));
        }

        self.print_welcome(out)?;

        let mut failed_turns = 0;
        let prompt = format!("{} ", INPUT_PROMPT.trim_end().bright_green());

        let reason = loop {
            let line = match input.read_line(&prompt)? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Interrupted => {
                    // Ctrl+C - just show new prompt
                    writeln!(out, "^C")?;
                    continue;
                }
                ReadOutcome::Eof => {
                    writeln!(out)?;
                    break EndReason::EndOfInput;
                }
            };

            if self.is_exit(&line) {
                debug!("run: exit keyword received");
                break EndReason::ExitKeyword;
            }

            let prompt_text = self.render_prompt(&line)?;
            info!(
                turn = self.transcript.exchange_count() + 1,
                prompt_len = prompt_text.len(),
                "Sending turn to model"
            );

            match self.generator.generate(&prompt_text).await {
                Ok(reply) => {
                    writeln!(out, "{} {}", REPLY_LABEL.bright_blue(), reply)?;
                    out.flush()?;
                    self.transcript.push_exchange(line, reply);
                }
                Err(e) => {
                    failed_turns += 1;
                    warn!(error = %e, retryable = e.is_retryable(), "Generation failed");
                    writeln!(err, "{} {}", "Error:".red(), e)?;
                    if self.on_error == OnError::Abort {
                        break EndReason::GenerationFailed;
                    }
                    writeln!(err, "{}", "The turn was dropped; try again.".dimmed())?;
                }
            }
        };

        self.state = SessionState::Terminated;
        let summary = SessionSummary {
            exchanges: self.transcript.exchange_count(),
            failed_turns,
            reason,
        };
        info!(?summary, "Session ended");
        Ok(summary)
    }

    fn print_welcome<O: Write>(&self, out: &mut O) -> Result<()> {
        writeln!(
            out,
            "{}",
            format!("환영합니다 AI 챗봇, Type '{}' to quit.", self.exit_keyword)
                .bright_cyan()
                .bold()
        )?;
        Ok(())
    }
}
