//! Line sources for the conversation loop

use std::io::{self, BufRead, Write};

use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Result of asking the user for one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line of text, without its trailing newline
    Line(String),
    /// Ctrl+C at the prompt
    Interrupted,
    /// Ctrl+D or end of piped input
    Eof,
}

/// Anything the session can read user lines from
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome>;
}

impl LineSource for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.readline(prompt) {
            Ok(line) => {
                let _ = self.add_history_entry(line.as_str());
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
        }
    }
}

/// Plain buffered reader, used when stdin is not a terminal
pub struct PlainInput<R> {
    reader: R,
}

impl<R: BufRead> PlainInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for PlainInput<R> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(ReadOutcome::Eof);
        }
        Ok(ReadOutcome::Line(strip_line_ending(buf)))
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
