use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use blackjack::{Deck, Game, LineDecider};

#[derive(Parser, Debug)]
#[command(name = "bj")]
#[command(author, version, about = "Terminal blackjack against a house dealer", long_about = None)]
struct Cli {
    /// Number of human players (asked interactively if omitted)
    #[arg(short = 'n', long)]
    players: Option<usize>,

    /// Seed for the shuffle, for replaying a deal
    #[arg(short, long)]
    seed: Option<u64>,

    /// Banner file printed at start, if it exists
    #[arg(long, default_value = "logo.txt")]
    logo: String,
}

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();
    Ok(())
}

fn print_logo(path: &Path) {
    match std::fs::read_to_string(path) {
        Ok(logo) => print!("{}", logo.cyan()),
        Err(e) => debug!("print_logo: skipping {}: {}", path.display(), e),
    }
}

/// Anything that is not a non-negative integer counts as zero players
fn ask_players<R: BufRead>(reader: &mut R) -> Result<usize> {
    print!("Number of players: ");
    io::stdout().flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().parse().unwrap_or(0))
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    info!("blackjack starting: {:?}", cli);

    print_logo(Path::new(&cli.logo));

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let num_players = match cli.players {
        Some(n) => n,
        None => ask_players(&mut reader)?,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut game = Game::new(num_players, Deck::shuffled(&mut rng))?;
    let mut decider = LineDecider::new(reader, io::stdout());
    game.run(&mut decider, &mut io::stdout()).context("Game aborted")?;

    Ok(())
}
