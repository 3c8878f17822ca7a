//! Parallel batch evaluation of two policies.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::error::MatchError;
use crate::policy::Policy;
use crate::result::EvaluationResults;

use super::Game;

impl Game {
    /// Plays `count` independent matches between two policies in parallel
    /// and aggregates the outcomes. Odd-numbered matches swap which policy
    /// deals first and negate the margin, so neither side keeps the
    /// first-deal advantage.
    ///
    /// Each match runs on its own generator derived from the game seed and
    /// the match index, so results are reproducible regardless of how the
    /// matches are scheduled across threads.
    ///
    /// # Errors
    ///
    /// Returns the first [`MatchError`] raised by an aborted match; the
    /// batch does not continue past it.
    pub fn evaluate<P0, P1>(
        &self,
        p0: &P0,
        p1: &P1,
        count: usize,
    ) -> Result<EvaluationResults, MatchError>
    where
        P0: Policy + Sync,
        P1: Policy + Sync,
    {
        let outcomes = (0..count)
            .into_par_iter()
            .map(|g| -> Result<(i32, usize), MatchError> {
                let mut rng = ChaCha8Rng::seed_from_u64(self.seed().wrapping_add(g as u64));
                if g % 2 == 0 {
                    let result = self.play(p0, p1, &mut rng)?;
                    Ok((result.value, result.hands_played))
                } else {
                    let result = self.play(p1, p0, &mut rng)?;
                    Ok((-result.value, result.hands_played))
                }
            })
            .collect::<Result<Vec<_>, MatchError>>()?;

        let mut results = EvaluationResults::default();
        for (points, hands) in outcomes {
            results.update(points, hands);
        }
        Ok(results)
    }
}
