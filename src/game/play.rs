//! Single-match orchestration.

use log::{debug, trace};
use rand_chacha::ChaCha8Rng;

use crate::error::MatchError;
use crate::hand::Hand;
use crate::pegging::PeggingHistory;
use crate::policy::Policy;
use crate::result::MatchResult;

use super::Game;

impl Game {
    /// Plays one full match between two policies. Player 0 deals the first
    /// hand; the deal alternates every hand until one player reaches the
    /// winning score.
    ///
    /// # Errors
    ///
    /// Returns a [`MatchError`] when a policy violates the protocol (an
    /// illegal discard partition, an illegal pegging play, or a pass while
    /// holding a playable card) or when the configured deck cannot cover a
    /// deal. Violations abort the match; nothing is retried.
    pub fn play(
        &self,
        p0: &impl Policy,
        p1: &impl Policy,
        rng: &mut ChaCha8Rng,
    ) -> Result<MatchResult, MatchError> {
        let policies: [&dyn Policy; 2] = [p0, p1];
        let winning = self.winning_score();
        let mut scores = [0u32; 2];
        let mut dealer = 0usize;
        let mut hands_played = 0usize;

        while scores[0].max(scores[1]) < winning {
            let deal_cards = self.cards_dealt();
            let mut deck = self.full_deck();
            deck.shuffle(rng);
            let in_play = deck
                .deal(2 * deal_cards + 1)
                .ok_or(MatchError::NotEnoughCards)?;
            hands_played += 1;

            let cards = in_play.cards();
            let dealt = [
                Hand::new(cards[..deal_cards].to_vec()),
                Hand::new(cards[deal_cards..2 * deal_cards].to_vec()),
            ];
            let cut = cards[2 * deal_cards];
            debug!("hand {hands_played}: cut {}", self.card_label(cut));

            // two for heels, before anyone discards
            let heels = self.heels_value(cut);
            if heels != 0 {
                scores[dealer] += heels;
                debug!("heels to dealer: {scores:?}");
            }

            let mut keeps = Vec::with_capacity(2);
            for p in 0..2 {
                let view = if p == 0 {
                    scores
                } else {
                    [scores[1], scores[0]]
                };
                let (kept, thrown) = policies[p].keep(self, &dealt[p], view, dealer == p, rng);
                if !dealt[p].is_legal_split(&[&kept, &thrown]) {
                    return Err(MatchError::InvalidPartition);
                }
                if kept.len() != self.cards_to_keep() {
                    return Err(MatchError::WrongKeepSize);
                }
                keeps.push((kept, thrown));
            }

            // pegging, starting with the non-dealer; history numbers the
            // dealer 0 and the non-dealer 1
            let mut history = PeggingHistory::new();
            let mut peg_hands = [keeps[0].0.clone(), keeps[1].0.clone()];
            let mut peg_turn = 1 - dealer;
            while scores[0].max(scores[1]) < winning && !history.is_terminal(self) {
                let view = if peg_turn == 0 {
                    scores
                } else {
                    [scores[1], scores[0]]
                };
                let peg_player = usize::from(peg_turn != dealer);
                let play = policies[peg_turn].peg(
                    self,
                    &peg_hands[peg_turn],
                    &history,
                    cut,
                    view,
                    peg_turn == dealer,
                    rng,
                );

                if play.is_none() && history.has_legal_play(self, &peg_hands[peg_turn], peg_player)
                {
                    return Err(MatchError::PassWithLegalPlay);
                }

                let score = history.play(self, play, peg_player)?;
                match play {
                    Some(card) => trace!("player {peg_turn} plays {}", self.card_label(card)),
                    None => trace!("player {peg_turn} passes"),
                }

                let net = score.total();
                if net > 0 {
                    scores[peg_turn] += net.unsigned_abs();
                    trace!("pegging score: {scores:?}");
                } else if net < 0 {
                    scores[1 - peg_turn] += net.unsigned_abs();
                    trace!("go: {scores:?}");
                }

                if let Some(card) = play {
                    let remaining = peg_hands[peg_turn].remove_one(card);
                    if remaining.len() == peg_hands[peg_turn].len() {
                        return Err(MatchError::CardNotInHand);
                    }
                    peg_hands[peg_turn] = remaining;
                }

                peg_turn = 1 - peg_turn;
            }

            // non-dealer's hand, dealer's hand, then the crib, each gated
            // on the winning score not yet being reached
            if scores[0].max(scores[1]) < winning {
                let s = self.score(&keeps[1 - dealer].0, Some(cut), false);
                scores[1 - dealer] += s.total();
                debug!(
                    "non-dealer {} scores {}: {scores:?}",
                    self.hand_label(&keeps[1 - dealer].0),
                    s.total()
                );
            }
            if scores[0].max(scores[1]) < winning {
                let s = self.score(&keeps[dealer].0, Some(cut), false);
                scores[dealer] += s.total();
                debug!(
                    "dealer {} scores {}: {scores:?}",
                    self.hand_label(&keeps[dealer].0),
                    s.total()
                );
            }
            if scores[0].max(scores[1]) < winning {
                let crib = keeps[0].1.merge(&keeps[1].1);
                let s = self.score(&crib, Some(cut), true);
                scores[dealer] += s.total();
                debug!(
                    "crib {} scores {}: {scores:?}",
                    self.hand_label(&crib),
                    s.total()
                );
            }

            dealer = 1 - dealer;
        }

        debug!("final scores: {scores:?}");
        Ok(MatchResult {
            value: self.game_value(scores),
            hands_played,
        })
    }
}
