//! Conversation transcript
//!
//! An append-only record of every completed exchange in a session. Turns are
//! stored as separate records so user text and model text never have to be
//! recovered by parsing the rendered string.

use std::fmt;

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Model,
}

impl Speaker {
    /// Label used when rendering the transcript into a prompt
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::User => "User",
            Speaker::Model => "AI",
        }
    }
}

/// One line of the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

/// Ordered, append-only list of turns
///
/// Only whole exchanges can be added, so the turn list always alternates
/// user, model, user, model.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed exchange: the user's line, then the model's reply
    pub fn push_exchange(&mut self, user: impl Into<String>, model: impl Into<String>) {
        self.turns.push(Turn {
            speaker: Speaker::User,
            text: user.into(),
        });
        self.turns.push(Turn {
            speaker: Speaker::Model,
            text: model.into(),
        });
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of completed exchanges
    pub fn exchange_count(&self) -> usize {
        self.turns.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Render as prompt context: `"\nUser: ...\nAI: ..."` per exchange
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for turn in &self.turns {
            write!(f, "\n{}: {}", turn.speaker.label(), turn.text)?;
        }
        Ok(())
    }
}
