//! Table flow: dealing, rounds, and picking the winner

use std::io::{BufRead, Write};

use log::debug;

use crate::GameError;
use crate::deck::Deck;
use crate::player::{BLACKJACK, Decision, Player};

/// Upper bound on human players so one deck always covers the opening deal
pub const MAX_PLAYERS: usize = 7;

/// Source of hit/stay choices for human players
pub trait Decider {
    fn decide(&mut self, player: &Player) -> Result<Decision, GameError>;
}

/// Asks on a writer and reads the answer from a line reader
///
/// `s` stays; any other answer, including a blank line, hits. End of input
/// counts as staying so a closed stdin cannot loop forever.
pub struct LineDecider<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineDecider<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Decider for LineDecider<R, W> {
    fn decide(&mut self, player: &Player) -> Result<Decision, GameError> {
        write!(self.writer, " ({}) stay?:", player.sum())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("LineDecider::decide: input closed, staying");
            return Ok(Decision::Stay);
        }

        if line.trim_end_matches(['\r', '\n']) == "s" {
            Ok(Decision::Stay)
        } else {
            Ok(Decision::Hit)
        }
    }
}

pub struct Game {
    /// Humans in seat order, dealer last
    players: Vec<Player>,
    deck: Deck,
}

impl Game {
    pub fn new(num_players: usize, deck: Deck) -> Result<Self, GameError> {
        if num_players > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers(num_players));
        }

        let mut players: Vec<Player> = (1..=num_players).map(Player::human).collect();
        players.push(Player::dealer());
        Ok(Self { players, deck })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    fn has_humans(&self) -> bool {
        self.players.iter().any(|p| !p.is_dealer())
    }

    /// Two cards to everyone, in seat order
    pub fn deal(&mut self) -> Result<(), GameError> {
        if !self.has_humans() {
            return Ok(());
        }
        for player in &mut self.players {
            for _ in 0..2 {
                player.give(self.deck.draw()?);
            }
        }
        Ok(())
    }

    /// Over once nobody can act (or there was nobody to play against)
    pub fn is_over(&self) -> bool {
        !self.has_humans() || self.players.iter().all(|p| !p.is_active())
    }

    /// Non-busted player closest to 21; earliest seat wins ties
    pub fn winner(&self) -> Option<&Player> {
        if !self.has_humans() {
            return None;
        }
        self.players
            .iter()
            .filter(|p| !p.is_busted())
            .min_by_key(|p| BLACKJACK - p.sum())
    }

    pub fn show_all<W: Write>(&self, out: &mut W) -> Result<(), GameError> {
        for player in &self.players {
            writeln!(out, "{}", player)?;
        }
        Ok(())
    }

    /// Give every active player one turn
    pub fn play_round<D: Decider, W: Write>(&mut self, decider: &mut D, out: &mut W) -> Result<(), GameError> {
        self.show_all(out)?;
        writeln!(out)?;

        for i in 0..self.players.len() {
            let player = &self.players[i];
            if player.is_busted() {
                writeln!(out, "{} is busted.", player.name())?;
                continue;
            }
            if player.is_staying() {
                writeln!(out, "{} is staying.", player.name())?;
                continue;
            }

            let decision = if player.is_dealer() {
                let decision = player.dealer_decision();
                let word = match decision {
                    Decision::Hit => "heat",
                    Decision::Stay => "stay",
                };
                writeln!(out, "{} ({}) {}", player.name(), player.sum(), word)?;
                decision
            } else {
                write!(out, "{}", player.name())?;
                out.flush()?;
                decider.decide(player)?
            };
            debug!("play_round: {} -> {:?}", player.name(), decision);

            match decision {
                Decision::Hit => {
                    let card = self.deck.draw()?;
                    self.players[i].give(card);
                }
                Decision::Stay => self.players[i].stay(),
            }
            writeln!(out, "{}", self.players[i])?;
        }
        Ok(())
    }

    /// Deal, play rounds until nobody can act, then announce the result
    pub fn run<D: Decider, W: Write>(&mut self, decider: &mut D, out: &mut W) -> Result<Option<String>, GameError> {
        self.deal()?;
        while !self.is_over() {
            self.play_round(decider, out)?;
        }

        let winner = self.winner().map(|p| p.name());
        match &winner {
            None => writeln!(out, "No winner")?,
            Some(name) => {
                writeln!(out)?;
                writeln!(out, "-=[Result]=-")?;
                self.show_all(out)?;
                writeln!(out, "Winner is {}", name)?;
            }
        }
        Ok(winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};
    use crate::player::Seat;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;
    use std::io::Cursor;

    struct Scripted(VecDeque<Decision>);

    impl Decider for Scripted {
        fn decide(&mut self, _player: &Player) -> Result<Decision, GameError> {
            Ok(self.0.pop_front().unwrap_or(Decision::Stay))
        }
    }

    fn cards(ranks: &[&'static str]) -> Vec<Card> {
        ranks.iter().map(|r| Card::new(Suit::Heart, r).unwrap()).collect()
    }

    #[test]
    fn test_too_many_players() {
        assert!(matches!(
            Game::new(MAX_PLAYERS + 1, Deck::standard()),
            Err(GameError::TooManyPlayers(8))
        ));
    }

    #[test]
    fn test_no_humans_ends_immediately() {
        let mut game = Game::new(0, Deck::standard()).unwrap();
        let mut out = Vec::new();

        let winner = game.run(&mut Scripted(VecDeque::new()), &mut out).unwrap();
        assert!(winner.is_none());
        assert!(game.players()[0].hand().is_empty());
        assert!(String::from_utf8(out).unwrap().contains("No winner"));
    }

    #[test]
    fn test_deal_two_each_in_seat_order() {
        let mut game = Game::new(1, Deck::from_cards(cards(&["A", "2", "3", "4"]))).unwrap();
        game.deal().unwrap();

        assert_eq!(game.players()[0].sum(), 3);
        assert_eq!(game.players()[1].sum(), 7);
        assert_eq!(game.players()[1].seat(), Seat::Dealer);
    }

    #[test]
    fn test_closest_to_21_wins() {
        // Player1: 10+9 stays at 19. Dealer: 10+8 = 18 stays.
        let deck = Deck::from_cards(cards(&["10", "9", "K", "8"]));
        let mut game = Game::new(1, deck).unwrap();
        let mut out = Vec::new();

        let winner = game
            .run(&mut Scripted(VecDeque::from(vec![Decision::Stay])), &mut out)
            .unwrap();
        assert_eq!(winner.as_deref(), Some("Player1"));

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Dealer (18) stay"));
        assert!(out.contains("Winner is Player1"));
    }

    #[test]
    fn test_dealer_hits_at_17_and_busted_player_loses() {
        // Player1: 10+6, hits K -> 26 busted. Dealer: 10+7 hits 2 -> 19, then stays.
        let deck = Deck::from_cards(cards(&["10", "6", "J", "7", "K", "2"]));
        let mut game = Game::new(1, deck).unwrap();
        let mut out = Vec::new();

        let winner = game
            .run(&mut Scripted(VecDeque::from(vec![Decision::Hit])), &mut out)
            .unwrap();
        assert_eq!(winner.as_deref(), Some("Dealer"));

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Dealer (17) heat"));
        assert!(out.contains("BUSTED!!"));
        assert!(out.contains("Player1 is busted."));
    }

    #[test]
    fn test_tie_goes_to_earlier_seat() {
        // Player1 and Player2 both on 20; dealer on 18
        let deck = Deck::from_cards(cards(&["10", "Q", "K", "J", "9", "9"]));
        let mut game = Game::new(2, deck).unwrap();
        let mut out = Vec::new();

        let winner = game
            .run(
                &mut Scripted(VecDeque::from(vec![Decision::Stay, Decision::Stay])),
                &mut out,
            )
            .unwrap();
        assert_eq!(winner.as_deref(), Some("Player1"));
    }

    #[test]
    fn test_everyone_busted_no_winner() {
        let mut game = Game::new(1, Deck::standard()).unwrap();
        for p in &mut game.players {
            p.give(Card::new(Suit::Spade, "K").unwrap());
            p.give(Card::new(Suit::Spade, "Q").unwrap());
            p.give(Card::new(Suit::Spade, "J").unwrap());
        }
        assert!(game.is_over());
        assert!(game.winner().is_none());
    }

    #[test]
    fn test_deck_running_out_is_an_error() {
        let mut game = Game::new(1, Deck::from_cards(cards(&["A", "2", "3"]))).unwrap();
        assert!(matches!(game.deal(), Err(GameError::DeckEmpty)));
    }

    #[test]
    fn test_full_game_with_seeded_deck_terminates() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut game = Game::new(3, Deck::shuffled(&mut rng)).unwrap();
        let mut out = Vec::new();

        // Everyone hits once, then stays
        let script = vec![Decision::Hit, Decision::Hit, Decision::Hit];
        game.run(&mut Scripted(VecDeque::from(script)), &mut out).unwrap();

        assert!(game.is_over());
        assert!(game.players().iter().all(|p| p.is_busted() || p.is_staying()));
    }

    #[test]
    fn test_line_decider() {
        let mut out = Vec::new();
        let mut decider = LineDecider::new(Cursor::new("\ns\n"), &mut out);
        let player = Player::human(1);

        assert_eq!(decider.decide(&player).unwrap(), Decision::Hit);
        assert_eq!(decider.decide(&player).unwrap(), Decision::Stay);
        assert_eq!(decider.decide(&player).unwrap(), Decision::Stay);

        drop(decider);
        assert_eq!(String::from_utf8(out).unwrap().matches("stay?:").count(), 3);
    }
}
