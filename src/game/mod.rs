//! Rule engine: ruleset tables, the canonical card set, scoring constants,
//! and match orchestration.

use std::collections::HashMap;

use crate::card::{Card, Rank, Suit};
use crate::combinations::Combinations;
use crate::deck::Deck;
use crate::error::ParseError;
use crate::hand::Hand;
use crate::options::GameOptions;

mod eval;
mod play;
mod score;

pub use score::HandScore;

/// Winning margin thresholds for skunk and double-skunk match values.
const SKUNK_SCORE: u32 = 90;
const DOUBLE_SKUNK_SCORE: u32 = 60;

/// A cribbage rule engine.
///
/// Owns the ruleset constants, the rank and suit tables, the canonical
/// full-deck card set, and the precomputed discard candidates for the
/// configured deal size. One `Game` referees any number of matches; the
/// seed passed at construction drives [`evaluate`](Game::evaluate) batches.
pub struct Game {
    options: GameOptions,
    /// Canonical rank names in ordinal order.
    rank_names: Vec<String>,
    /// Canonical names and aliases, each mapped to its ordinal.
    rank_lookup: HashMap<String, usize>,
    suits: Vec<Suit>,
    full_deck: Vec<Card>,
    /// Every size-`throw_cards` index subset of a dealt hand.
    throws: Vec<Vec<usize>>,
    /// The rank scoring heels and nobs, when the ruleset has one.
    jack: Option<Rank>,
    seed: u64,
}

impl Game {
    /// Creates a rule engine for the given ruleset.
    ///
    /// The seed makes evaluation batches reproducible: match `g` of a
    /// batch always runs on a generator derived from `seed` and `g`.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rank_names = Vec::with_capacity(options.rank_names.len());
        let mut rank_lookup = HashMap::new();
        for (ordinal, names) in options.rank_names.iter().enumerate() {
            let mut parts = names.split('|');
            let canonical = parts.next().unwrap_or_default().to_string();
            rank_lookup.insert(canonical.clone(), ordinal);
            for alias in parts {
                rank_lookup.insert(alias.to_string(), ordinal);
            }
            rank_names.push(canonical);
        }

        let suits: Vec<Suit> = options.suit_chars.chars().map(Suit).collect();

        let mut full_deck = Vec::with_capacity(rank_names.len() * suits.len() * options.copies);
        for ordinal in 0..rank_names.len() {
            for &suit in &suits {
                for _ in 0..options.copies {
                    full_deck.push(Card::new(Rank(ordinal as u8), suit));
                }
            }
        }

        let deal_cards = options.keep_cards + options.throw_cards;
        let throws: Vec<Vec<usize>> = Combinations::new(deal_cards, options.throw_cards).collect();

        let jack = rank_names
            .iter()
            .position(|name| *name == options.jack_rank)
            .map(|ordinal| Rank(ordinal as u8));

        Self {
            options,
            rank_names,
            rank_lookup,
            suits,
            full_deck,
            throws,
            jack,
            seed,
        }
    }

    /// Returns the ruleset options.
    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Pegging point value of a rank: ordinal plus one, capped at the
    /// configured maximum.
    #[must_use]
    pub fn rank_value(&self, rank: Rank) -> u32 {
        (rank.0 as u32 + 1).min(self.options.max_card_value)
    }

    /// Number of cards each player keeps after discarding.
    #[must_use]
    pub fn cards_to_keep(&self) -> usize {
        self.options.keep_cards
    }

    /// Number of cards dealt to each player.
    #[must_use]
    pub fn cards_dealt(&self) -> usize {
        self.options.keep_cards + self.options.throw_cards
    }

    /// The running total a pegging round may never exceed.
    #[must_use]
    pub fn pegging_limit(&self) -> u32 {
        self.options.pegging_limit
    }

    /// Score a player must reach to win a match.
    #[must_use]
    pub fn winning_score(&self) -> u32 {
        self.options.winning_score
    }

    /// Points for a card subset summing to `sum`.
    #[must_use]
    pub fn sum_score(&self, sum: u32) -> u32 {
        if sum == self.options.scoring_sum {
            self.options.sum_value
        } else {
            0
        }
    }

    /// Points for a streak of `matches` consecutive same-rank pegging
    /// plays: two per unordered pair.
    #[must_use]
    pub fn peg_pair_value(&self, matches: usize) -> i32 {
        (matches * matches.saturating_sub(1)) as i32
    }

    /// Points for a pegging run of the given length.
    #[must_use]
    pub fn peg_straight_value(&self, length: usize) -> i32 {
        if length >= 3 { length as i32 } else { 0 }
    }

    /// Points for bringing the round total to `total` during pegging.
    #[must_use]
    pub fn peg_sum_value(&self, total: u32) -> i32 {
        if total == self.options.scoring_sum {
            self.options.sum_value as i32
        } else {
            0
        }
    }

    /// Points for bringing the round total exactly to the pegging limit;
    /// reduced when the opponent already conceded a go this round.
    #[must_use]
    pub fn peg_exact_value(&self, already_go: bool) -> i32 {
        if already_go { 1 } else { 2 }
    }

    /// Points for a cut-excluding flush of the given size.
    #[must_use]
    pub fn hand_flush_value(&self, length: usize) -> u32 {
        if length == self.options.keep_cards {
            length as u32
        } else {
            0
        }
    }

    /// Points for a cut-including flush of the given size.
    #[must_use]
    pub fn turn_flush_value(&self, length: usize) -> u32 {
        if length == self.options.keep_cards + 1 {
            length as u32
        } else {
            0
        }
    }

    /// Points for a run of `length` consecutive ranks with `combos` ways
    /// of assembling it.
    #[must_use]
    pub fn run_value(&self, length: usize, combos: usize) -> u32 {
        if length >= 3 { (length * combos) as u32 } else { 0 }
    }

    /// Dealer's bonus when the cut card is the designated jack rank.
    #[must_use]
    pub fn heels_value(&self, cut: Card) -> u32 {
        if Some(cut.rank) == self.jack {
            self.options.heels_value
        } else {
            0
        }
    }

    /// Nobs value of a held rank: one point for the designated jack rank.
    #[must_use]
    pub fn nob_value(&self, rank: Rank) -> u32 {
        u32::from(Some(rank) == self.jack)
    }

    /// Every legal set of discard indices into a dealt hand, in
    /// lexicographic order.
    #[must_use]
    pub fn throws(&self) -> &[Vec<usize>] {
        &self.throws
    }

    /// Returns a fresh, unshuffled full deck for this ruleset.
    #[must_use]
    pub fn full_deck(&self) -> Deck {
        Deck::new(self.full_deck.clone())
    }

    /// Parses card text: a rank name or alias followed by a single suit
    /// character, e.g. `"TS"`, `"10S"`, or `"JH"`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when either token is unrecognized.
    pub fn parse_card(&self, text: &str) -> Result<Card, ParseError> {
        let mut chars = text.chars();
        let suit_char = chars.next_back().ok_or(ParseError::TooShort)?;
        let rank_token = chars.as_str();
        if rank_token.is_empty() {
            return Err(ParseError::TooShort);
        }

        let &ordinal = self
            .rank_lookup
            .get(rank_token)
            .ok_or(ParseError::UnknownRank)?;
        let suit = Suit(suit_char);
        if !self.suits.contains(&suit) {
            return Err(ParseError::UnknownSuit);
        }

        Ok(Card::new(Rank(ordinal as u8), suit))
    }

    /// Human-readable label for a card, e.g. `"TS"`.
    #[must_use]
    pub fn card_label(&self, card: Card) -> String {
        format!("{}{}", self.rank_names[card.rank.ordinal()], card.suit.0)
    }

    /// Human-readable label for a hand, cards separated by spaces.
    #[must_use]
    pub fn hand_label(&self, hand: &Hand) -> String {
        hand.cards()
            .iter()
            .map(|&c| self.card_label(c))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Match value for a pair of final scores: 0 when no player has
    /// reached the winning score yet, otherwise plus or minus 1 for the
    /// winner (positive for player 0), scaled to 2 for a skunk and 3 for
    /// a double skunk.
    #[must_use]
    pub fn game_value(&self, scores: [u32; 2]) -> i32 {
        if scores[0].max(scores[1]) < self.options.winning_score {
            return 0;
        }

        let loser = scores[0].min(scores[1]);
        let points = if loser <= DOUBLE_SKUNK_SCORE {
            3
        } else if loser <= SKUNK_SCORE {
            2
        } else {
            1
        };

        if scores[0] > scores[1] { points } else { -points }
    }

    pub(crate) fn seed(&self) -> u64 {
        self.seed
    }
}
