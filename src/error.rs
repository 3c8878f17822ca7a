//! Error types for parsing, pegging plays, and match orchestration.

use thiserror::Error;

/// Errors that can occur while parsing card text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Card text is too short to hold a rank token and a suit character.
    #[error("card text is too short")]
    TooShort,
    /// Rank token is not a canonical name or alias in the ruleset.
    #[error("unrecognized rank token")]
    UnknownRank,
    /// Suit character is not in the ruleset.
    #[error("unrecognized suit character")]
    UnknownSuit,
}

/// Errors for illegal pegging actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Not this player's turn to act.
    #[error("not this player's turn")]
    WrongTurn,
    /// Player already passed this round but offered a card.
    #[error("player has already passed this round")]
    AlreadyPassed,
    /// Card would push the round total past the pegging limit.
    #[error("card would put the round total over the limit")]
    OverLimit,
}

/// Fatal errors that abort a match.
///
/// All of these are protocol violations by a policy except
/// [`NotEnoughCards`](Self::NotEnoughCards), which indicates a ruleset
/// whose deck cannot cover a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Not enough cards in the deck to deal both hands and the cut card.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// A policy's discard does not partition its dealt hand.
    #[error("discard is not a partition of the dealt hand")]
    InvalidPartition,
    /// A policy kept the wrong number of cards.
    #[error("kept hand has the wrong size")]
    WrongKeepSize,
    /// A policy passed while holding a playable card.
    #[error("passed while holding a legal play")]
    PassWithLegalPlay,
    /// A policy offered a pegging play the history rejects.
    #[error("illegal pegging play: {0}")]
    IllegalPlay(#[from] PlayError),
    /// A policy played a card that is not in its pegging hand.
    #[error("played card is not in the player's hand")]
    CardNotInHand,
}
