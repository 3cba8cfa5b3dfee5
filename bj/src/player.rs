//! Seats at the table

use std::fmt;

use crate::card::Card;

/// Highest non-busted total
pub const BLACKJACK: u32 = 21;

/// The dealer keeps hitting while at or below this total
pub const DEALER_STAND_ABOVE: u32 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// Human player, numbered from 1
    Human(usize),
    Dealer,
}

/// What a player wants to do on their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stay,
}

#[derive(Debug, Clone)]
pub struct Player {
    seat: Seat,
    hand: Vec<Card>,
    staying: bool,
}

impl Player {
    pub fn human(number: usize) -> Self {
        Self::new(Seat::Human(number))
    }

    pub fn dealer() -> Self {
        Self::new(Seat::Dealer)
    }

    fn new(seat: Seat) -> Self {
        Self {
            seat,
            hand: Vec::new(),
            staying: false,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn is_dealer(&self) -> bool {
        self.seat == Seat::Dealer
    }

    pub fn name(&self) -> String {
        match self.seat {
            Seat::Human(n) => format!("Player{}", n),
            Seat::Dealer => "Dealer".to_string(),
        }
    }

    pub fn give(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Plain total; aces count as 1
    pub fn sum(&self) -> u32 {
        self.hand.iter().map(|c| c.value).sum()
    }

    pub fn is_busted(&self) -> bool {
        self.sum() > BLACKJACK
    }

    pub fn stay(&mut self) {
        self.staying = true;
    }

    pub fn is_staying(&self) -> bool {
        self.staying
    }

    /// Still taking turns
    pub fn is_active(&self) -> bool {
        !self.staying && !self.is_busted()
    }

    /// House rule: stay above 17, hit otherwise
    pub fn dealer_decision(&self) -> Decision {
        if self.sum() > DEALER_STAND_ABOVE {
            Decision::Stay
        } else {
            Decision::Hit
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.name())?;
        for card in &self.hand {
            write!(f, "{} ", card)?;
        }
        write!(f, "=> sum: {}", self.sum())?;
        if self.is_busted() {
            write!(f, " BUSTED!!")?;
        }
        Ok(())
    }
}
