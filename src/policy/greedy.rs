//! Greedy strategies: maximize immediate points, breaking ties uniformly.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::game::Game;
use crate::hand::Hand;
use crate::pegging::PeggingHistory;

use super::{Pegger, Thrower};

/// Discards to maximize the kept hand's static score, plus the thrown
/// pair's static score when dealing and minus it otherwise. Neither score
/// sees the cut card. Ties are broken uniformly at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyThrower;

impl Thrower for GreedyThrower {
    fn keep(
        &self,
        game: &Game,
        hand: &Hand,
        _scores: [u32; 2],
        am_dealer: bool,
        rng: &mut ChaCha8Rng,
    ) -> (Hand, Hand) {
        let crib_sign = if am_dealer { 1 } else { -1 };

        let mut best: Option<(Hand, Hand)> = None;
        let mut best_net = i32::MIN;
        let mut ties = 0u32;
        for indices in game.throws() {
            let (kept, thrown) = hand.split(indices);
            let net = game.score(&kept, None, false).total() as i32
                + crib_sign * game.score(&thrown, None, true).total() as i32;

            if net > best_net {
                best_net = net;
                best = Some((kept, thrown));
                ties = 0;
            } else if net == best_net {
                // uniform choice among ties via reservoir replacement
                ties += 1;
                if rng.random::<f64>() < 1.0 / f64::from(ties) {
                    best = Some((kept, thrown));
                }
            }
        }

        best.unwrap_or_else(|| hand.split(&[]))
    }
}

/// Plays the legal card worth the most immediate pegging points, passing
/// only when no card is legal. Ties are broken uniformly at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPegger;

impl Pegger for GreedyPegger {
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

        let mut best = None;
        let mut best_points = i32::MIN;
        let mut ties = 0u32;
        for &card in hand.cards() {
            if !history.is_legal(game, card) {
                continue;
            }
            let Ok(score) = history.score(game, Some(card), player) else {
                continue;
            };
            let points = score.total();

            if points > best_points {
                best_points = points;
                best = Some(card);
                ties = 0;
            } else if points == best_points {
                ties += 1;
                if rng.random::<f64>() < 1.0 / f64::from(ties) {
                    best = Some(card);
                }
            }
        }

        best
    }
}
