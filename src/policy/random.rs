//! Uniformly random strategies, mostly useful as baselines.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::game::Game;
use crate::hand::Hand;
use crate::pegging::PeggingHistory;

use super::{Pegger, Thrower};

/// Discards a uniformly random legal subset of the dealt hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomThrower;

impl Thrower for RandomThrower {
    fn keep(
        &self,
        game: &Game,
        hand: &Hand,
        _scores: [u32; 2],
        _am_dealer: bool,
        rng: &mut ChaCha8Rng,
    ) -> (Hand, Hand) {
        let throws = game.throws();
        if throws.is_empty() {
            return hand.split(&[]);
        }
        hand.split(&throws[rng.random_range(0..throws.len())])
    }
}

/// Plays a uniformly random legal card, passing only when no card is legal.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPegger;

impl Pegger for RandomPegger {
    fn peg(
        &self,
        game: &Game,
        hand: &Hand,
        history: &PeggingHistory,
        _cut: Card,
        _scores: [u32; 2],
        am_dealer: bool,
        rng: &mut ChaCha8Rng,
    ) -> Option<Card> {
        let player = if am_dealer { 0 } else { 1 };

        let mut chosen = None;
        let mut legal = 0u32;
        for &card in hand.cards() {
            if !history.is_legal(game, card) || history.score(game, Some(card), player).is_err() {
                continue;
            }
            // reservoir sample of size one over the legal cards
            legal += 1;
            if rng.random::<f64>() < 1.0 / f64::from(legal) {
                chosen = Some(card);
            }
        }

        chosen
    }
}
