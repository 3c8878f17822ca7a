//! A cribbage simulation and policy-evaluation engine.
//!
//! The crate provides a [`Game`] rule engine that scores hands, referees
//! the pegging phase, plays full matches between pluggable [`Policy`]
//! strategies, and evaluates policy pairs over seeded parallel batches.
//!
//! # Example
//!
//! ```
//! use cribrs::{CompoundPolicy, Game, GameOptions, GreedyPegger, GreedyThrower, RandomPegger,
//!              RandomThrower};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let greedy = CompoundPolicy::new(GreedyThrower, GreedyPegger);
//! let random = CompoundPolicy::new(RandomThrower, RandomPegger);
//!
//! let results = game.evaluate(&greedy, &random, 4).unwrap();
//! assert_eq!(results.games(), 4);
//! ```

pub mod card;
pub mod combinations;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pegging;
pub mod policy;
pub mod result;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use combinations::Combinations;
pub use deck::Deck;
pub use error::{MatchError, ParseError, PlayError};
pub use game::{Game, HandScore};
pub use hand::Hand;
pub use options::GameOptions;
pub use pegging::{PegScore, PeggingHistory};
pub use policy::{
    CompoundPolicy, GreedyPegger, GreedyThrower, Pegger, Policy, RandomPegger, RandomThrower,
    Thrower,
};
pub use result::{EvaluationResults, MatchResult};
