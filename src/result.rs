//! Match and batch-evaluation result types.

use std::collections::BTreeMap;
use std::fmt;

/// Result of a single completed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// Match value: positive for player 0, negative for player 1, with
    /// magnitude 1, 2 (skunk), or 3 (double skunk).
    pub value: i32,
    /// Number of hands dealt over the match.
    pub hands_played: usize,
}

/// Aggregate report for a batch of matches, oriented so that positive
/// margins favor the first policy passed to the evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationResults {
    /// Frequency of each per-match point margin.
    margins: BTreeMap<i32, usize>,
    p0_points: u32,
    p1_points: u32,
    total_hands: usize,
    games: usize,
}

impl EvaluationResults {
    /// Folds one match outcome into the report.
    pub fn update(&mut self, points: i32, hands: usize) {
        *self.margins.entry(points).or_insert(0) += 1;
        if points > 0 {
            self.p0_points += points.unsigned_abs();
        } else {
            self.p1_points += points.unsigned_abs();
        }
        self.total_hands += hands;
        self.games += 1;
    }

    /// Number of matches recorded.
    #[must_use]
    pub const fn games(&self) -> usize {
        self.games
    }

    /// Frequency of each per-match point margin, in margin order.
    #[must_use]
    pub const fn margins(&self) -> &BTreeMap<i32, usize> {
        &self.margins
    }

    /// Average points won per match by the first policy.
    #[must_use]
    pub fn p0_average(&self) -> f64 {
        self.per_game(f64::from(self.p0_points))
    }

    /// Average points won per match by the second policy.
    #[must_use]
    pub fn p1_average(&self) -> f64 {
        self.per_game(f64::from(self.p1_points))
    }

    /// Average hands dealt per match.
    #[must_use]
    pub fn average_hands(&self) -> f64 {
        self.per_game(self.total_hands as f64)
    }

    /// Mean per-match margin; positive favors the first policy.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.per_game(f64::from(self.p0_points) - f64::from(self.p1_points))
    }

    /// Two standard errors of the mean margin, computed from the margin
    /// histogram. The true mean lies within this bound of
    /// [`mean`](Self::mean) with roughly 95% confidence.
    #[must_use]
    pub fn two_std_errs(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let n = self.games as f64;
        let mean = self.mean();
        let mean_sq = self
            .margins
            .iter()
            .map(|(&margin, &freq)| f64::from(margin * margin) * freq as f64)
            .sum::<f64>()
            / n;
        2.0 * ((mean_sq - mean * mean) / n).max(0.0).sqrt()
    }

    fn per_game(&self, quantity: f64) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            quantity / self.games as f64
        }
    }
}

impl fmt::Display for EvaluationResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "net {:+.3} ± {:.3} over {} games, {:.1} hands/game, margins {:?}",
            self.mean(),
            self.two_std_errs(),
            self.games,
            self.average_hands(),
            self.margins,
        )
    }
}
