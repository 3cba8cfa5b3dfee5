//! Cards and suits

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Diamond,
    Heart,
    Clover,
    Spade,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamond, Suit::Heart, Suit::Clover, Suit::Spade];

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Diamond => "Diamond",
            Suit::Heart => "Heart",
            Suit::Clover => "Clover",
            Suit::Spade => "Spade",
        }
    }
}

/// Face labels in deck order; index + 1 is the pip value, capped at 10
pub const RANKS: [&str; 13] = ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: &'static str,
    pub value: u32,
}

impl Card {
    /// Build a card from a rank label in [`RANKS`]
    pub fn new(suit: Suit, rank: &'static str) -> Option<Self> {
        let idx = RANKS.iter().position(|r| *r == rank)?;
        Some(Self {
            suit,
            rank: RANKS[idx],
            value: (idx as u32 + 1).min(10),
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}: {})", self.suit.name(), self.rank)
    }
}
