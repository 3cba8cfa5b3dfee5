//! The card shoe

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::GameError;
use crate::card::{Card, RANKS, Suit};

/// Cards waiting to be dealt, drawn from the front
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// One full 52-card deck in suit/rank order
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| RANKS.iter().filter_map(move |&rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// A full deck shuffled with the given RNG
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards: Vec<Card> = Self::standard().cards.into();
        cards.shuffle(rng);
        Self { cards: cards.into() }
    }

    /// A deck that deals exactly these cards, in order
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards: cards.into() }
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop_front().ok_or(GameError::DeckEmpty)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_standard_deck_has_52_distinct_cards() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 52);

        let unique: HashSet<Card> = deck.cards.iter().copied().collect();
        assert_eq!(unique.len(), 52);

        // 4 suits x (1..=9 + 10 x 4)
        let total: u32 = deck.cards.iter().map(|c| c.value).sum();
        assert_eq!(total, 340);
    }

    #[test]
    fn test_shuffled_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::shuffled(&mut rng);

        let shuffled: HashSet<Card> = deck.cards.iter().copied().collect();
        let standard: HashSet<Card> = Deck::standard().cards.iter().copied().collect();
        assert_eq!(shuffled, standard);
    }

    #[test]
    fn test_draw_until_empty() {
        let mut deck = Deck::from_cards(vec![Card::new(Suit::Heart, "A").unwrap()]);

        assert_eq!(deck.draw().unwrap().rank, "A");
        assert!(deck.is_empty());
        assert!(matches!(deck.draw(), Err(GameError::DeckEmpty)));
    }
}
