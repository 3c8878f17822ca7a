//! Card value types.

/// Card suit, identified by its single-character label (e.g. `'S'` for
/// spades).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Suit(pub char);

/// Card rank, identified by its ordinal within the ruleset's rank order
/// (0 = ace in the standard game).
///
/// Canonical names and aliases for ranks live in the rule engine's rank
/// table, not here, so ranks stay `Copy` and compare by value. Ordering is
/// by ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(pub u8);

impl Rank {
    /// Returns the ordinal as a usize, for table indexing.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self.0 as usize
    }
}

/// A playing card.
///
/// All cards in play during a match come from one canonical set built by
/// the rule engine, but nothing relies on that: equality is plain value
/// equality on the (rank, suit) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}
