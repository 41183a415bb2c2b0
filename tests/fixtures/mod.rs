//! Shared helpers for the integration tests

#![allow(dead_code)]

use elo_calc::{EloConfig, RatingCalculator, RatingPair};

/// Tolerance used when comparing computed ratings
pub const EPSILON: f64 = 1e-9;

/// Calculator with the given K-factor and C-value and the default L-factor
pub fn calculator(k_factor: f64, c_value: f64) -> RatingCalculator {
    RatingCalculator::new(
        EloConfig::default()
            .with_k_factor(k_factor)
            .with_c_value(c_value),
    )
    .unwrap()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub fn assert_pair_close(actual: RatingPair, expected: RatingPair) {
    assert_close(actual.rating_a, expected.rating_a);
    assert_close(actual.rating_b, expected.rating_b);
}
