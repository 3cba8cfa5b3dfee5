use std::io::{self, BufRead, Write};

use clap::Parser;
use eyre::{Context, Result};
use log::info;

use birthday::cli::{self, Cli};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();
    Ok(())
}

fn value_or_ask<R: BufRead, W: Write>(value: Option<i64>, reader: &mut R, writer: &mut W, prompt: &str) -> Result<i64> {
    match value {
        Some(v) => Ok(v),
        None => cli::ask_number(reader, writer, prompt),
    }
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    info!("birthday starting: {:?}", cli);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();

    let year = value_or_ask(cli.year, &mut reader, &mut stdout, cli::YEAR_PROMPT)?;
    let month = value_or_ask(cli.month, &mut reader, &mut stdout, cli::MONTH_PROMPT)?;
    let day = value_or_ask(cli.day, &mut reader, &mut stdout, cli::DAY_PROMPT)?;

    println!("{}", birthday::describe(year, month, day));
    Ok(())
}
