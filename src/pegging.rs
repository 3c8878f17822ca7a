//! Pegging-phase play history.
//!
//! The history is a persistent chain of play nodes stored in an append-only
//! arena. Nodes link backward to the previous play in the current round and
//! to the node that began the round; neither link is ever rewritten, so
//! search code can probe many hypothetical plays from the same point through
//! [`PeggingHistory::score`] without copying or mutating anything.

use std::collections::HashSet;

use crate::card::Card;
use crate::error::PlayError;
use crate::game::Game;
use crate::hand::Hand;

/// Point breakdown for a single pegging action.
///
/// A negative [`total`](Self::total) means the points flow to the
/// non-acting player: a "go" concession is `last == -1`, crediting the
/// opponent with one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PegScore {
    /// Points for consecutive same-rank cards ending at this play.
    pub pairs: i32,
    /// Points for bringing the round total to the scoring sum.
    pub fifteens: i32,
    /// Points for the longest run ending at this play.
    pub runs: i32,
    /// Exact-limit or final-card bonus, or the go concession (negative).
    pub last: i32,
}

impl PegScore {
    /// Net points for the action; negative credits the opponent.
    #[must_use]
    pub const fn total(&self) -> i32 {
        self.pairs + self.fifteens + self.runs + self.last
    }
}

/// One entry in the history arena: the state immediately after an action.
#[derive(Debug, Clone)]
struct PlayNode {
    /// Previous play in the current round, if any.
    prev_play: Option<usize>,
    /// Node that began the current round, if any.
    prev_round: Option<usize>,
    /// The card played, or `None` for a pass.
    card: Option<Card>,
    /// The acting player, or `None` for the root node.
    player: Option<usize>,
    /// Running total for the current round.
    total: u32,
    /// Whether each player has passed since the last round reset.
    passed: [bool; 2],
    /// Cards each player has played this hand.
    played: [usize; 2],
    /// Score produced by this action.
    score: PegScore,
}

impl PlayNode {
    const fn root() -> Self {
        Self {
            prev_play: None,
            prev_round: None,
            card: None,
            player: None,
            total: 0,
            passed: [false, false],
            played: [0, 0],
            score: PegScore {
                pairs: 0,
                fifteens: 0,
                runs: 0,
                last: 0,
            },
        }
    }
}

/// The history of cards played during the pegging phase of one hand.
///
/// Players are numbered 0 for the dealer and 1 for the non-dealer
/// throughout. [`score`](Self::score) is pure and answers "what would this
/// action be worth right now"; [`play`](Self::play) additionally appends
/// the resulting node and advances the head.
#[derive(Debug, Clone)]
pub struct PeggingHistory {
    nodes: Vec<PlayNode>,
    head: usize,
}

impl Default for PeggingHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PeggingHistory {
    /// Creates an empty history positioned at the round root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![PlayNode::root()],
            head: 0,
        }
    }

    fn node(&self) -> &PlayNode {
        &self.nodes[self.head]
    }

    /// Running total for the current round.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.node().total
    }

    /// Whether the given player has passed since the last round reset.
    #[must_use]
    pub fn has_passed(&self, player: usize) -> bool {
        self.node().passed[player]
    }

    /// Whether the next play starts a new round: the total is zero, the
    /// total sits at the pegging limit, or both players have passed.
    #[must_use]
    pub fn start_round(&self, game: &Game) -> bool {
        let n = self.node();
        n.total == 0 || n.total == game.pegging_limit() || (n.passed[0] && n.passed[1])
    }

    /// Whether both players have played every kept card.
    #[must_use]
    pub fn is_terminal(&self, game: &Game) -> bool {
        let n = self.node();
        n.played[0] + n.played[1] == 2 * game.cards_to_keep()
    }

    /// Whether playing `card` would respect the pegging limit. Assumes the
    /// acting player holds the card and has not passed this round.
    #[must_use]
    pub fn is_legal(&self, game: &Game, card: Card) -> bool {
        let base = if self.start_round(game) {
            0
        } else {
            self.node().total
        };
        base + game.rank_value(card.rank) <= game.pegging_limit()
    }

    /// Whether the player has not passed this round and holds at least one
    /// card whose play would be legal.
    #[must_use]
    pub fn has_legal_play(&self, game: &Game, hand: &Hand, player: usize) -> bool {
        !self.node().passed[player] && hand.cards().iter().any(|&c| self.is_legal(game, c))
    }

    /// Score of the most recent action (the zero score at the root).
    #[must_use]
    pub fn last_score(&self) -> PegScore {
        self.node().score
    }

    /// Returns the score the given player would earn by playing `card`
    /// (or passing, for `None`) at the current head, without applying the
    /// action.
    ///
    /// A pass is always legal here; passing while a legal card is in hand
    /// is the orchestrator's protocol check, not the history's. A pass
    /// after the player already passed this round scores zero; a pass
    /// while the opponent has not passed concedes a go, reported as a
    /// negative score crediting the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::AlreadyPassed`] when the player plays a card
    /// after passing this round, and [`PlayError::OverLimit`] when the
    /// card would push the round total past the pegging limit.
    pub fn score(
        &self,
        game: &Game,
        play: Option<Card>,
        player: usize,
    ) -> Result<PegScore, PlayError> {
        let n = self.node();
        let opponent = 1 - player;

        let Some(card) = play else {
            if !n.passed[player] && !n.passed[opponent] {
                // go: one point flows to the opponent
                return Ok(PegScore {
                    last: -1,
                    ..PegScore::default()
                });
            }
            // pass after a go was already conceded, either way around
            return Ok(PegScore::default());
        };

        let start = self.start_round(game);
        if !start && n.passed[player] {
            return Err(PlayError::AlreadyPassed);
        }

        let prev_total = if start { 0 } else { n.total };
        let new_total = prev_total + game.rank_value(card.rank);
        if new_total > game.pegging_limit() {
            return Err(PlayError::OverLimit);
        }

        // scan backward through the current round for streaks and runs
        // ending at the new card
        let mut count = 1usize;
        let mut curr_matches: i32 = 1;
        let mut max_matches: i32 = 1;
        let mut max_straight = 1usize;
        let mut min_rank = card.rank;
        let mut max_rank = card.rank;
        let mut doubles = false;
        let mut ranks_seen = HashSet::new();
        ranks_seen.insert(card.rank);

        let mut curr = if start { None } else { Some(self.head) };
        while let Some(idx) = curr {
            // stop once neither a longer streak nor a longer run is possible
            if curr_matches != max_matches && doubles {
                break;
            }
            let node = &self.nodes[idx];
            if let Some(played) = node.card {
                count += 1;

                if played.rank == card.rank {
                    if curr_matches != -1 {
                        curr_matches += 1;
                    }
                    max_matches = max_matches.max(curr_matches);
                } else {
                    // streak broken for the rest of the round
                    curr_matches = -1;
                }

                min_rank = min_rank.min(played.rank);
                max_rank = max_rank.max(played.rank);
                if !ranks_seen.insert(played.rank) {
                    doubles = true;
                }
                if !doubles && max_rank.ordinal() - min_rank.ordinal() + 1 == count {
                    max_straight = count;
                }
            }
            curr = node.prev_play;
        }

        let pairs = game.peg_pair_value(max_matches.unsigned_abs() as usize);
        let runs = game.peg_straight_value(max_straight);
        let fifteens = game.peg_sum_value(new_total);
        let last = if new_total == game.pegging_limit() {
            game.peg_exact_value(n.passed[opponent])
        } else if n.played[0] + n.played[1] + 1 == 2 * game.cards_to_keep() {
            // very last card of the hand
            1
        } else {
            0
        };

        Ok(PegScore {
            pairs,
            fifteens,
            runs,
            last,
        })
    }

    /// Applies an action: validates it, appends the resulting node, and
    /// moves the head to it. Returns the action's score.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::WrongTurn`] when the actor is the same player
    /// who acted last, plus everything [`score`](Self::score) rejects.
    pub fn play(
        &mut self,
        game: &Game,
        play: Option<Card>,
        player: usize,
    ) -> Result<PegScore, PlayError> {
        if let Some(prev) = self.node().player {
            if player != 1 - prev {
                return Err(PlayError::WrongTurn);
            }
        }

        let score = self.score(game, play, player)?;
        let start = self.start_round(game);

        let n = self.node();
        let mut total = if start { 0 } else { n.total };
        let mut passed = if start { [false, false] } else { n.passed };
        let mut played = n.played;
        let prev_round = n.prev_round;

        match play {
            Some(card) => {
                total += game.rank_value(card.rank);
                played[player] += 1;
            }
            None => passed[player] = true,
        }

        let (prev_play, prev_round) = if start {
            (None, Some(self.head))
        } else {
            (Some(self.head), prev_round)
        };

        self.nodes.push(PlayNode {
            prev_play,
            prev_round,
            card: play,
            player: Some(player),
            total,
            passed,
            played,
            score,
        });
        self.head = self.nodes.len() - 1;

        Ok(score)
    }

    /// Reconstructs the full action sequence, oldest round first, each
    /// round an ordered list of (player, card-or-pass) entries. For audit
    /// and logging; the scorer never calls this.
    #[must_use]
    pub fn plays(&self) -> Vec<Vec<(usize, Option<Card>)>> {
        let mut rounds = Vec::new();
        let mut round = Vec::new();

        let mut curr = Some(self.head);
        while let Some(idx) = curr {
            let n = &self.nodes[idx];
            if let Some(player) = n.player {
                round.push((player, n.card));
            }
            if n.prev_play.is_none() {
                if !round.is_empty() {
                    round.reverse();
                    rounds.push(std::mem::take(&mut round));
                }
                curr = n.prev_round;
            } else {
                curr = n.prev_play;
            }
        }

        rounds.reverse();
        rounds
    }
}
