//! Point-total policies
//!
//! Converts raw point totals into a rating update using one of the
//! [`PointsPolicy`] variants.

use crate::error::RatingResult;
use crate::rating::calculator::{keep_on_error, RatingCalculator};
use crate::types::{Outcome, PointsPolicy, RatingPair};
use crate::utils::{points_fraction, surprise_sign};
use tracing::debug;

impl RatingCalculator {
    /// Update both ratings from point totals under the given policy
    pub fn compute_from_points(
        &self,
        rating_a: impl Into<f64>,
        rating_b: impl Into<f64>,
        points_a: impl Into<f64>,
        points_b: impl Into<f64>,
        policy: PointsPolicy,
    ) -> RatingResult<RatingPair> {
        let (rating_a, rating_b) = (rating_a.into(), rating_b.into());
        let (points_a, points_b) = (points_a.into(), points_b.into());

        match policy {
            PointsPolicy::Outcome => {
                let (score_a, score_b) = Outcome::from_points(points_a, points_b).scores();
                self.update(rating_a, rating_b, score_a, score_b)
            }
            PointsPolicy::Rationalize => {
                let (score_a, score_b) = rationalize(points_a, points_b);
                self.update(rating_a, rating_b, score_a, score_b)
            }
            PointsPolicy::Margin => self.margin_update(rating_a, rating_b, points_a, points_b),
        }
    }

    /// [`compute_from_points`](Self::compute_from_points) under the margin policy
    pub fn compute_from_points_default(
        &self,
        rating_a: impl Into<f64>,
        rating_b: impl Into<f64>,
        points_a: impl Into<f64>,
        points_b: impl Into<f64>,
    ) -> RatingResult<RatingPair> {
        self.compute_from_points(rating_a, rating_b, points_a, points_b, PointsPolicy::Margin)
    }

    /// Lenient form taking the raw policy selector (0 outcome, 1 rationalize,
    /// 2 margin); rejected input is logged and the ratings come back unchanged
    pub fn compute_from_points_or_keep(
        &self,
        rating_a: impl Into<f64>,
        rating_b: impl Into<f64>,
        points_a: impl Into<f64>,
        points_b: impl Into<f64>,
        policy: u8,
    ) -> RatingPair {
        let (rating_a, rating_b) = (rating_a.into(), rating_b.into());
        let (points_a, points_b) = (points_a.into(), points_b.into());
        let result = PointsPolicy::try_from(policy).and_then(|policy| {
            self.compute_from_points(rating_a, rating_b, points_a, points_b, policy)
        });
        keep_on_error(result, rating_a, rating_b)
    }

    fn margin_update(
        &self,
        rating_a: f64,
        rating_b: f64,
        points_a: f64,
        points_b: f64,
    ) -> RatingResult<RatingPair> {
        let (score_a, score_b) = Outcome::from_points(points_a, points_b).scores();
        let base = self.update(rating_a, rating_b, score_a, score_b)?;

        // Bonus direction follows the pre-match expectation
        let (expected_a, expected_b) = self.expected_scores(rating_a, rating_b);
        let bonus_a = surprise_sign(score_a, expected_a)
            * self.l_factor()
            * points_fraction(points_a, points_b);
        let bonus_b = surprise_sign(score_b, expected_b)
            * self.l_factor()
            * points_fraction(points_b, points_a);

        debug!("Margin bonus {:.2}/{:.2}", bonus_a, bonus_b);

        Ok(RatingPair::new(
            base.rating_a + bonus_a,
            base.rating_b + bonus_b,
        ))
    }
}

/// Each side's share of the total; a scoreless match counts as a draw
fn rationalize(points_a: f64, points_b: f64) -> (f64, f64) {
    if points_a == 0.0 && points_b == 0.0 {
        return (0.5, 0.5);
    }
    let total = points_a + points_b;
    (points_a / total, points_b / total)
}
