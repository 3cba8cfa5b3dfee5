//! CLI argument parsing and interactive prompts for birthday

use std::io::{BufRead, Write};

use clap::Parser;
use eyre::{Result, eyre};
use log::debug;

pub const YEAR_PROMPT: &str = "몇 년도에 태어났나요? (예: 2000): ";
pub const MONTH_PROMPT: &str = "몇 월에 태어났나요? (1-12): ";
pub const DAY_PROMPT: &str = "며칠이에요? (예: 15): ";
pub const NOT_A_NUMBER: &str = "숫자를 입력해 주세요.";

#[derive(Parser, Debug)]
#[command(name = "bd")]
#[command(author, version, about = "Find the weekday of a date", long_about = None)]
pub struct Cli {
    /// Year (asked interactively if omitted)
    #[arg(allow_negative_numbers = true)]
    pub year: Option<i64>,

    /// Month, 1-12 (asked interactively if omitted)
    #[arg(allow_negative_numbers = true)]
    pub month: Option<i64>,

    /// Day of month (asked interactively if omitted)
    #[arg(allow_negative_numbers = true)]
    pub day: Option<i64>,
}

/// Ask until the user types an integer
///
/// Blank or non-numeric answers print a hint and ask again. End of input is
/// an error.
pub fn ask_number<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<i64> {
    loop {
        write!(writer, "{}", prompt)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(eyre!("Input ended before a number was entered"));
        }

        match line.trim().parse::<i64>() {
            Ok(n) => return Ok(n),
            Err(e) => {
                debug!("ask_number: rejected {:?}: {}", line.trim(), e);
                writeln!(writer, "{}", NOT_A_NUMBER)?;
            }
        }
    }
}
