//! Elo rating updates for two-participant matches
//!
//! The calculator covers results given as a win/loss/draw, as raw scores,
//! or as point totals under one of the [`PointsPolicy`](crate::types::PointsPolicy)
//! variants.

pub mod calculator;
pub mod points;

// Re-export commonly used types
pub use calculator::RatingCalculator;
