//! Elo rating calculator
//!
//! A `RatingCalculator` holds the K-factor, C-value and L-factor and turns
//! two current ratings plus a match result into two updated ratings. It has
//! no mutable state, so one instance can be shared freely between callers
//! and threads.

use crate::config::rating::EloConfig;
use crate::error::{RatingError, RatingResult};
use crate::types::{Outcome, RatingPair};
use crate::utils::valid_scores;
use tracing::{debug, warn};

/// Elo rating calculator for two-participant matches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingCalculator {
    config: EloConfig,
}

impl Default for RatingCalculator {
    fn default() -> Self {
        Self {
            config: EloConfig::default(),
        }
    }
}

impl RatingCalculator {
    /// Create a new calculator from a validated configuration
    pub fn new(config: EloConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Create a calculator from the three tuning constants
    pub fn with_factors(
        k_factor: impl Into<f64>,
        c_value: impl Into<f64>,
        l_factor: impl Into<f64>,
    ) -> crate::error::Result<Self> {
        Self::new(EloConfig {
            k_factor: k_factor.into(),
            c_value: c_value.into(),
            l_factor: l_factor.into(),
        })
    }

    pub fn config(&self) -> &EloConfig {
        &self.config
    }

    pub fn k_factor(&self) -> f64 {
        self.config.k_factor
    }

    pub fn c_value(&self) -> f64 {
        self.config.c_value
    }

    pub fn l_factor(&self) -> f64 {
        self.config.l_factor
    }

    /// Probability that a player rated `rating` beats one rated `opponent`
    pub fn expected_score(&self, rating: f64, opponent: f64) -> f64 {
        1.0 / (1.0 + 10f64.powf((opponent - rating) / self.config.c_value))
    }

    /// Expected scores `(expected_a, expected_b)` for a pairing
    pub fn expected_scores(
        &self,
        rating_a: impl Into<f64>,
        rating_b: impl Into<f64>,
    ) -> (f64, f64) {
        let (rating_a, rating_b) = (rating_a.into(), rating_b.into());
        (
            self.expected_score(rating_a, rating_b),
            self.expected_score(rating_b, rating_a),
        )
    }

    /// Update both ratings from actual scores
    ///
    /// Scores must each lie in [0, 1] and sum to less than 1.1; anything
    /// else is rejected with [`RatingError::InvalidScores`].
    pub fn compute_from_scores(
        &self,
        rating_a: impl Into<f64>,
        rating_b: impl Into<f64>,
        score_a: impl Into<f64>,
        score_b: impl Into<f64>,
    ) -> RatingResult<RatingPair> {
        self.update(rating_a.into(), rating_b.into(), score_a.into(), score_b.into())
    }

    /// Update both ratings from a win, loss or draw
    pub fn compute_from_outcome(
        &self,
        rating_a: impl Into<f64>,
        rating_b: impl Into<f64>,
        outcome: Outcome,
    ) -> RatingResult<RatingPair> {
        let (score_a, score_b) = outcome.scores();
        self.update(rating_a.into(), rating_b.into(), score_a, score_b)
    }

    /// Like [`compute_from_scores`](Self::compute_from_scores), but logs a
    /// rejected input and returns the ratings unchanged
    pub fn compute_from_scores_or_keep(
        &self,
        rating_a: impl Into<f64>,
        rating_b: impl Into<f64>,
        score_a: impl Into<f64>,
        score_b: impl Into<f64>,
    ) -> RatingPair {
        let (rating_a, rating_b) = (rating_a.into(), rating_b.into());
        keep_on_error(
            self.compute_from_scores(rating_a, rating_b, score_a, score_b),
            rating_a,
            rating_b,
        )
    }

    /// Like [`compute_from_outcome`](Self::compute_from_outcome), taking the
    /// raw selector (0 draw, 1 A won, 2 B won); an unknown selector is
    /// logged and the ratings come back unchanged
    pub fn compute_from_outcome_or_keep(
        &self,
        rating_a: impl Into<f64>,
        rating_b: impl Into<f64>,
        outcome: u8,
    ) -> RatingPair {
        let (rating_a, rating_b) = (rating_a.into(), rating_b.into());
        let result = Outcome::try_from(outcome)
            .and_then(|outcome| self.compute_from_outcome(rating_a, rating_b, outcome));
        keep_on_error(result, rating_a, rating_b)
    }

    pub(crate) fn update(
        &self,
        rating_a: f64,
        rating_b: f64,
        score_a: f64,
        score_b: f64,
    ) -> RatingResult<RatingPair> {
        if !valid_scores(score_a, score_b) {
            return Err(RatingError::InvalidScores { score_a, score_b });
        }

        let (expected_a, expected_b) = self.expected_scores(rating_a, rating_b);
        let new_a = rating_a + self.config.k_factor * (score_a - expected_a);
        let new_b = rating_b + self.config.k_factor * (score_b - expected_b);

        debug!(
            "Elo update {:.2}/{:.2} -> {:.2}/{:.2} (scores {}/{}, expected {:.4}/{:.4})",
            rating_a, rating_b, new_a, new_b, score_a, score_b, expected_a, expected_b
        );

        Ok(RatingPair::new(new_a, new_b))
    }
}

/// Fall back to the input ratings when a computation is rejected
pub(crate) fn keep_on_error(
    result: RatingResult<RatingPair>,
    rating_a: f64,
    rating_b: f64,
) -> RatingPair {
    result.unwrap_or_else(|e| {
        warn!("{}; keeping ratings {} and {}", e, rating_a, rating_b);
        RatingPair::unchanged(rating_a, rating_b)
    })
}
