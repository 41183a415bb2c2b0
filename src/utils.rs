//! Small numeric helpers shared by the rating policies

/// Scores must sum to strictly less than this. The slack above 1.0 is
/// intentional and tolerates floating point noise in caller-derived scores.
pub const SCORE_SUM_LIMIT: f64 = 1.1;

/// Check that both scores lie in [0, 1] and sum to less than [`SCORE_SUM_LIMIT`]
pub fn valid_scores(score_a: f64, score_b: f64) -> bool {
    (0.0..=1.0).contains(&score_a)
        && (0.0..=1.0).contains(&score_b)
        && score_a + score_b < SCORE_SUM_LIMIT
}

/// Direction of the surprise: 1 if the side beat its expectation, -1 if it
/// fell short, 0 if it met it exactly
pub fn surprise_sign(score: f64, expected: f64) -> f64 {
    if score == expected {
        0.0
    } else {
        (score - expected).signum()
    }
}

/// Share of the total points held by `points`, or 0 when both totals are
/// equal (which includes 0 vs 0)
pub fn points_fraction(points: f64, other: f64) -> f64 {
    if points == other {
        return 0.0;
    }
    points / (points + other)
}
