//! Ruleset configuration options.

/// Canonical rank names for the standard game, low to high. A `|` separates
/// a canonical name from its aliases, so tens parse as both `"T"` and
/// `"10"`.
pub const DEFAULT_RANK_NAMES: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "T|10", "J", "Q", "K",
];

/// Suit characters for the standard game.
pub const DEFAULT_SUIT_CHARS: &str = "SHDC";

/// Configuration options for a cribbage ruleset.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_winning_score(61)
///     .with_pegging_limit(31);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Rank names, low to high, with `|`-separated aliases after the
    /// canonical name.
    pub rank_names: Vec<String>,
    /// One character per suit.
    pub suit_chars: String,
    /// Copies of each (rank, suit) card in the full deck.
    pub copies: usize,
    /// Cards each player keeps after discarding.
    pub keep_cards: usize,
    /// Cards each player throws to the crib.
    pub throw_cards: usize,
    /// The running total a pegging round may never exceed (traditionally 31).
    pub pegging_limit: u32,
    /// Score a player must reach to win the match.
    pub winning_score: u32,
    /// The sum a card subset must reach to score (traditionally 15).
    pub scoring_sum: u32,
    /// Points per subset reaching the scoring sum.
    pub sum_value: u32,
    /// Points per unordered pair of same-rank cards.
    pub pair_value: u32,
    /// Points to the dealer when the cut card is the designated jack rank.
    pub heels_value: u32,
    /// Cap on a rank's pegging value (face cards count 10).
    pub max_card_value: u32,
    /// Canonical name of the rank scoring heels and nobs.
    pub jack_rank: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            rank_names: DEFAULT_RANK_NAMES.iter().map(ToString::to_string).collect(),
            suit_chars: DEFAULT_SUIT_CHARS.to_string(),
            copies: 1,
            keep_cards: 4,
            throw_cards: 2,
            pegging_limit: 31,
            winning_score: 121,
            scoring_sum: 15,
            sum_value: 2,
            pair_value: 2,
            heels_value: 2,
            max_card_value: 10,
            jack_rank: "J".to_string(),
        }
    }
}

impl GameOptions {
    /// Sets the rank names, low to high.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let names = vec!["A".to_string(), "2".to_string(), "3".to_string()];
    /// let options = GameOptions::default().with_rank_names(names.clone());
    /// assert_eq!(options.rank_names, names);
    /// ```
    #[must_use]
    pub fn with_rank_names(mut self, rank_names: Vec<String>) -> Self {
        self.rank_names = rank_names;
        self
    }

    /// Sets the suit characters.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_suit_chars("SH".to_string());
    /// assert_eq!(options.suit_chars, "SH");
    /// ```
    #[must_use]
    pub fn with_suit_chars(mut self, suit_chars: String) -> Self {
        self.suit_chars = suit_chars;
        self
    }

    /// Sets the number of copies of each card in the full deck.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_copies(2);
    /// assert_eq!(options.copies, 2);
    /// ```
    #[must_use]
    pub fn with_copies(mut self, copies: usize) -> Self {
        self.copies = copies;
        self
    }

    /// Sets the number of cards each player keeps.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_keep_cards(5);
    /// assert_eq!(options.keep_cards, 5);
    /// ```
    #[must_use]
    pub fn with_keep_cards(mut self, keep_cards: usize) -> Self {
        self.keep_cards = keep_cards;
        self
    }

    /// Sets the number of cards each player throws to the crib.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_throw_cards(1);
    /// assert_eq!(options.throw_cards, 1);
    /// ```
    #[must_use]
    pub fn with_throw_cards(mut self, throw_cards: usize) -> Self {
        self.throw_cards = throw_cards;
        self
    }

    /// Sets the pegging limit.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_pegging_limit(21);
    /// assert_eq!(options.pegging_limit, 21);
    /// ```
    #[must_use]
    pub fn with_pegging_limit(mut self, pegging_limit: u32) -> Self {
        self.pegging_limit = pegging_limit;
        self
    }

    /// Sets the winning score.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_score(61);
    /// assert_eq!(options.winning_score, 61);
    /// ```
    #[must_use]
    pub fn with_winning_score(mut self, winning_score: u32) -> Self {
        self.winning_score = winning_score;
        self
    }

    /// Sets the sum a subset must reach to score.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_scoring_sum(21);
    /// assert_eq!(options.scoring_sum, 21);
    /// ```
    #[must_use]
    pub fn with_scoring_sum(mut self, scoring_sum: u32) -> Self {
        self.scoring_sum = scoring_sum;
        self
    }

    /// Sets the points per subset reaching the scoring sum.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_sum_value(3);
    /// assert_eq!(options.sum_value, 3);
    /// ```
    #[must_use]
    pub fn with_sum_value(mut self, sum_value: u32) -> Self {
        self.sum_value = sum_value;
        self
    }

    /// Sets the points per pair.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_pair_value(3);
    /// assert_eq!(options.pair_value, 3);
    /// ```
    #[must_use]
    pub fn with_pair_value(mut self, pair_value: u32) -> Self {
        self.pair_value = pair_value;
        self
    }

    /// Sets the dealer's bonus for a jack cut card.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_heels_value(1);
    /// assert_eq!(options.heels_value, 1);
    /// ```
    #[must_use]
    pub fn with_heels_value(mut self, heels_value: u32) -> Self {
        self.heels_value = heels_value;
        self
    }

    /// Sets the cap on a rank's pegging value.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_card_value(9);
    /// assert_eq!(options.max_card_value, 9);
    /// ```
    #[must_use]
    pub fn with_max_card_value(mut self, max_card_value: u32) -> Self {
        self.max_card_value = max_card_value;
        self
    }

    /// Sets the canonical name of the rank scoring heels and nobs.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_jack_rank("Q".to_string());
    /// assert_eq!(options.jack_rank, "Q");
    /// ```
    #[must_use]
    pub fn with_jack_rank(mut self, jack_rank: String) -> Self {
        self.jack_rank = jack_rank;
        self
    }
}
