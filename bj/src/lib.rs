//! Blackjack - numbered players against a house dealer
//!
//! Simplified table rules: aces always count as 1, there is no splitting or
//! doubling, and the dealer stands above 17. Once nobody can act, the
//! non-busted hand closest to 21 wins.

pub mod card;
pub mod deck;
pub mod game;
pub mod player;

use thiserror::Error;

pub use card::{Card, Suit};
pub use deck::Deck;
pub use game::{Decider, Game, LineDecider, MAX_PLAYERS};
pub use player::{Decision, Player, Seat};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("The deck ran out of cards")]
    DeckEmpty,

    #[error("Too many players: {0} (max {max})", max = MAX_PLAYERS)]
    TooManyPlayers(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
