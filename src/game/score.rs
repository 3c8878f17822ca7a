//! Scoring for completed hands and cribs.

use crate::card::Card;
use crate::combinations::Combinations;
use crate::hand::Hand;

use super::Game;

/// Subscores for a completed hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandScore {
    /// Points from same-rank pairs.
    pub pairs: u32,
    /// Points from subsets summing to the scoring sum.
    pub fifteens: u32,
    /// Points from runs of consecutive ranks.
    pub runs: u32,
    /// Points from flushes.
    pub flushes: u32,
    /// Points from holding the jack matching the cut card's suit.
    pub nobs: u32,
}

impl HandScore {
    /// Total points: the sum of the five subscores.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.pairs + self.fifteens + self.runs + self.flushes + self.nobs
    }
}

impl Game {
    /// Scores a hand against the optional cut card.
    ///
    /// Crib hands score flushes only when the cut card extends them; all
    /// other categories are identical. With no cut card there are no nobs.
    #[must_use]
    pub fn score(&self, hand: &Hand, cut: Option<Card>, is_crib: bool) -> HandScore {
        let mut all: Vec<Card> = hand.cards().to_vec();
        if let Some(c) = cut {
            all.push(c);
        }

        let mut rank_count = vec![0usize; self.rank_names.len()];
        for c in &all {
            rank_count[c.rank.ordinal()] += 1;
        }

        let mut fifteens = 0;
        for size in 2..=all.len() {
            for subset in Combinations::new(all.len(), size) {
                let sum: u32 = subset.iter().map(|&i| self.rank_value(all[i].rank)).sum();
                fifteens += self.sum_score(sum);
            }
        }

        let mut pairs = 0;
        for &count in &rank_count {
            // unordered pairs of same-rank cards
            pairs += (count * count.saturating_sub(1) / 2) as u32;
        }
        pairs *= self.options.pair_value;

        // a run scores once per way of assembling it, so track the product
        // of the per-rank counts along the current stretch
        let mut runs = 0;
        let mut curr_run = 0;
        let mut combos = 1;
        for &count in &rank_count {
            if count == 0 {
                runs += self.run_value(curr_run, combos);
                curr_run = 0;
                combos = 1;
            } else {
                curr_run += 1;
                combos *= count;
            }
        }
        runs += self.run_value(curr_run, combos);

        let mut flushes = 0;
        if let Some(&first) = hand.cards().first() {
            let matches = hand
                .cards()
                .iter()
                .filter(|c| c.suit == first.suit)
                .count();
            if matches == hand.len() && cut.is_some_and(|c| c.suit == first.suit) {
                flushes = self.turn_flush_value(matches + 1);
            } else if matches == hand.len() && !is_crib {
                flushes = self.hand_flush_value(hand.len());
            }
        }

        let mut nobs = 0;
        if let Some(cut) = cut {
            for c in hand.cards() {
                if c.suit == cut.suit {
                    nobs += self.nob_value(c.rank);
                }
            }
        }

        HandScore {
            pairs,
            fifteens,
            runs,
            flushes,
            nobs,
        }
    }
}
