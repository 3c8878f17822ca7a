//! Play policies: the strategy contract and the built-in strategies.

use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::game::Game;
use crate::hand::Hand;
use crate::pegging::PeggingHistory;

mod greedy;
mod random;

pub use greedy::{GreedyPegger, GreedyThrower};
pub use random::{RandomPegger, RandomThrower};

/// A discard strategy.
pub trait Thrower {
    /// Splits a dealt hand into (kept, thrown). The result must be a legal
    /// partition of `hand` with a kept part of the ruleset's keep size.
    ///
    /// `scores` is `[self, opponent]` from the acting player's
    /// perspective. Both entries are below the winning score, with one
    /// exception: a heels bonus can lift the dealer to it, and the discard
    /// request is still made before the match resolves.
    fn keep(
        &self,
        game: &Game,
        hand: &Hand,
        scores: [u32; 2],
        am_dealer: bool,
        rng: &mut ChaCha8Rng,
    ) -> (Hand, Hand);
}

/// A pegging strategy.
pub trait Pegger {
    /// Chooses a card from `hand` to play against `history`, or `None` to
    /// pass. Passing while a legal play exists is a protocol violation and
    /// aborts the match. The history numbers the dealer player 0.
    fn peg(
        &self,
        game: &Game,
        hand: &Hand,
        history: &PeggingHistory,
        cut: Card,
        scores: [u32; 2],
        am_dealer: bool,
        rng: &mut ChaCha8Rng,
    ) -> Option<Card>;
}

/// The full strategy contract consumed by the match orchestrator.
///
/// Externally supplied strategies implement this trait; the orchestrator
/// never retries a violating action, it aborts the match.
pub trait Policy {
    /// Splits a dealt hand into (kept, thrown); see [`Thrower::keep`].
    fn keep(
        &self,
        game: &Game,
        hand: &Hand,
        scores: [u32; 2],
        am_dealer: bool,
        rng: &mut ChaCha8Rng,
    ) -> (Hand, Hand);

    /// Chooses a pegging play; see [`Pegger::peg`].
    fn peg(
        &self,
        game: &Game,
        hand: &Hand,
        history: &PeggingHistory,
        cut: Card,
        scores: [u32; 2],
        am_dealer: bool,
        rng: &mut ChaCha8Rng,
    ) -> Option<Card>;
}

/// Combines an independent thrower and pegger into a full policy.
///
/// ```
/// use cribrs::{CompoundPolicy, GreedyPegger, GreedyThrower};
///
/// let policy = CompoundPolicy::new(GreedyThrower, GreedyPegger);
/// let _ = policy;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundPolicy<T, P> {
    thrower: T,
    pegger: P,
}

impl<T, P> CompoundPolicy<T, P> {
    /// Creates a policy that discards with `thrower` and pegs with
    /// `pegger`.
    pub const fn new(thrower: T, pegger: P) -> Self {
        Self { thrower, pegger }
    }
}

impl<T: Thrower, P: Pegger> Policy for CompoundPolicy<T, P> {
    fn keep(
        &self,
        game: &Game,
        hand: &Hand,
        scores: [u32; 2],
        am_dealer: bool,
        rng: &mut ChaCha8Rng,
    ) -> (Hand, Hand) {
        self.thrower.keep(game, hand, scores, am_dealer, rng)
    }

    fn peg(
        &self,
        game: &Game,
        hand: &Hand,
        history: &PeggingHistory,
        cut: Card,
        scores: [u32; 2],
        am_dealer: bool,
        rng: &mut ChaCha8Rng,
    ) -> Option<Card> {
        self.pegger
            .peg(game, hand, history, cut, scores, am_dealer, rng)
    }
}
