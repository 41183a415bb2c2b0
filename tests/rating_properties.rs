//! Property tests for the Elo update rules

mod fixtures;

use elo_calc::utils::surprise_sign;
use elo_calc::{Outcome, PointsPolicy, RatingCalculator, RatingPair};
use proptest::prelude::*;

fn rating() -> impl Strategy<Value = f64> {
    0.0..3000.0f64
}

fn any_outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        Just(Outcome::Draw),
        Just(Outcome::AWon),
        Just(Outcome::BWon),
    ]
}

proptest! {
    #[test]
    fn swapping_sides_swaps_result(
        rating_a in rating(),
        rating_b in rating(),
        score_a in 0.0..=1.0f64,
        k_factor in 1.0..64.0f64,
    ) {
        let calculator = fixtures::calculator(k_factor, 400.0);
        let score_b = 1.0 - score_a;

        let forward = calculator.compute_from_scores(rating_a, rating_b, score_a, score_b).unwrap();
        let reverse = calculator.compute_from_scores(rating_b, rating_a, score_b, score_a).unwrap();

        prop_assert_eq!(forward, reverse.swapped());
    }

    #[test]
    fn complementary_scores_are_zero_sum(
        rating_a in rating(),
        rating_b in rating(),
        score_a in 0.0..=1.0f64,
        k_factor in 1.0..64.0f64,
        c_value in 100.0..800.0f64,
    ) {
        let calculator = fixtures::calculator(k_factor, c_value);
        let result = calculator
            .compute_from_scores(rating_a, rating_b, score_a, 1.0 - score_a)
            .unwrap();

        let (delta_a, delta_b) = result.deltas(rating_a, rating_b);
        prop_assert!((delta_a + delta_b).abs() < 1e-9);
        prop_assert!(delta_a.abs() <= k_factor);
    }

    #[test]
    fn draw_between_equals_changes_nothing(rating in rating()) {
        let calculator = RatingCalculator::default();
        let result = calculator.compute_from_outcome(rating, rating, Outcome::Draw).unwrap();
        prop_assert_eq!(result, RatingPair::new(rating, rating));
    }

    #[test]
    fn winner_never_loses_rating(
        rating_a in rating(),
        rating_b in rating(),
        outcome in any_outcome(),
    ) {
        let calculator = RatingCalculator::default();
        let result = calculator.compute_from_outcome(rating_a, rating_b, outcome).unwrap();
        let (delta_a, delta_b) = result.deltas(rating_a, rating_b);

        match outcome {
            Outcome::AWon => prop_assert!(delta_a > 0.0 && delta_b < 0.0),
            Outcome::BWon => prop_assert!(delta_a < 0.0 && delta_b > 0.0),
            Outcome::Draw => prop_assert!((delta_a + delta_b).abs() < 1e-9),
        }
    }

    #[test]
    fn scores_summing_past_slack_are_rejected(
        rating_a in rating(),
        rating_b in rating(),
        score_a in 0.1..=1.0f64,
    ) {
        let calculator = RatingCalculator::default();
        let score_b = (1.1 - score_a + 0.01).min(1.0);
        prop_assume!(score_a + score_b >= 1.1);

        prop_assert!(calculator.compute_from_scores(rating_a, rating_b, score_a, score_b).is_err());
        prop_assert_eq!(
            calculator.compute_from_scores_or_keep(rating_a, rating_b, score_a, score_b),
            RatingPair::unchanged(rating_a, rating_b)
        );
    }

    #[test]
    fn rationalize_matches_point_share(
        rating_a in rating(),
        rating_b in rating(),
        points_a in 0.0..100.0f64,
        points_b in 0.0..100.0f64,
    ) {
        prop_assume!(points_a + points_b > 0.0);
        let calculator = RatingCalculator::default();
        let total = points_a + points_b;

        let rationalized = calculator
            .compute_from_points(rating_a, rating_b, points_a, points_b, PointsPolicy::Rationalize)
            .unwrap();
        let scored = calculator
            .compute_from_scores(rating_a, rating_b, points_a / total, points_b / total)
            .unwrap();

        prop_assert_eq!(rationalized, scored);
    }

    #[test]
    fn margin_bonus_follows_surprise(
        rating_a in rating(),
        rating_b in rating(),
        points_a in 1.0..100.0f64,
        points_b in 1.0..100.0f64,
    ) {
        prop_assume!(points_a != points_b);
        let calculator = RatingCalculator::default();
        let (expected_a, expected_b) = calculator.expected_scores(rating_a, rating_b);
        let (score_a, score_b) = Outcome::from_points(points_a, points_b).scores();

        let margin = calculator
            .compute_from_points(rating_a, rating_b, points_a, points_b, PointsPolicy::Margin)
            .unwrap();
        let plain = calculator
            .compute_from_points(rating_a, rating_b, points_a, points_b, PointsPolicy::Outcome)
            .unwrap();

        let bonus_a = margin.rating_a - plain.rating_a;
        let bonus_b = margin.rating_b - plain.rating_b;

        prop_assert_eq!(bonus_a.signum(), surprise_sign(score_a, expected_a));
        prop_assert_eq!(bonus_b.signum(), surprise_sign(score_b, expected_b));

        let total = points_a + points_b;
        prop_assert!((bonus_a.abs() - 16.0 * points_a / total).abs() < 1e-6);
        prop_assert!((bonus_b.abs() - 16.0 * points_b / total).abs() < 1e-6);
    }

    #[test]
    fn drawn_points_add_no_margin_bonus(
        rating_a in rating(),
        rating_b in rating(),
        points in 0.0..100.0f64,
    ) {
        let calculator = RatingCalculator::default();
        let margin = calculator
            .compute_from_points(rating_a, rating_b, points, points, PointsPolicy::Margin)
            .unwrap();
        let drawn = calculator.compute_from_outcome(rating_a, rating_b, Outcome::Draw).unwrap();

        prop_assert_eq!(margin, drawn);
    }
}
