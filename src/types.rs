//! Common types used throughout the rating calculator

use crate::error::RatingError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Result of a single match between participants A and B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Draw = 0,
    AWon = 1,
    BWon = 2,
}

impl Outcome {
    /// Reduce two point totals to a win, loss or draw by comparison alone
    pub fn from_points(points_a: f64, points_b: f64) -> Self {
        if points_a == points_b {
            Outcome::Draw
        } else if points_a > points_b {
            Outcome::AWon
        } else {
            Outcome::BWon
        }
    }

    /// Actual scores `(score_a, score_b)` for this outcome
    pub fn scores(self) -> (f64, f64) {
        match self {
            Outcome::Draw => (0.5, 0.5),
            Outcome::AWon => (1.0, 0.0),
            Outcome::BWon => (0.0, 1.0),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Draw => write!(f, "draw"),
            Outcome::AWon => write!(f, "a_won"),
            Outcome::BWon => write!(f, "b_won"),
        }
    }
}

impl FromStr for Outcome {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draw" | "d" => Ok(Outcome::Draw),
            "a_won" | "a-won" | "a" => Ok(Outcome::AWon),
            "b_won" | "b-won" | "b" => Ok(Outcome::BWon),
            _ => Err(RatingError::invalid_argument("outcome", s)),
        }
    }
}

/// 0 = draw, 1 = A won, 2 = B won
impl TryFrom<u8> for Outcome {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Draw),
            1 => Ok(Outcome::AWon),
            2 => Ok(Outcome::BWon),
            other => Err(RatingError::invalid_argument("outcome", other)),
        }
    }
}

/// How point totals are turned into a rating update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointsPolicy {
    /// Only the winner matters; the margin is discarded
    Outcome = 0,
    /// Each side scores its share of the total points
    Rationalize = 1,
    /// Win/loss/draw update plus an L-factor bonus scaled by the point share
    #[default]
    Margin = 2,
}

impl std::fmt::Display for PointsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointsPolicy::Outcome => write!(f, "outcome"),
            PointsPolicy::Rationalize => write!(f, "rationalize"),
            PointsPolicy::Margin => write!(f, "margin"),
        }
    }
}

impl FromStr for PointsPolicy {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "outcome" => Ok(PointsPolicy::Outcome),
            "rationalize" | "rationalise" => Ok(PointsPolicy::Rationalize),
            "margin" | "l_factor" | "l-factor" => Ok(PointsPolicy::Margin),
            _ => Err(RatingError::invalid_argument("points policy", s)),
        }
    }
}

/// 0 = outcome, 1 = rationalize, 2 = margin
impl TryFrom<u8> for PointsPolicy {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PointsPolicy::Outcome),
            1 => Ok(PointsPolicy::Rationalize),
            2 => Ok(PointsPolicy::Margin),
            other => Err(RatingError::invalid_argument("points policy", other)),
        }
    }
}

/// Ratings of participants A and B after a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingPair {
    pub rating_a: f64,
    pub rating_b: f64,
}

impl RatingPair {
    pub fn new(rating_a: f64, rating_b: f64) -> Self {
        Self { rating_a, rating_b }
    }

    /// The identity result: both ratings as they were before the match
    pub fn unchanged(rating_a: f64, rating_b: f64) -> Self {
        Self::new(rating_a, rating_b)
    }

    /// Rating change for each side relative to the given prior ratings
    pub fn deltas(&self, old_a: f64, old_b: f64) -> (f64, f64) {
        (self.rating_a - old_a, self.rating_b - old_b)
    }

    /// Same pair seen from B's side
    pub fn swapped(self) -> Self {
        Self::new(self.rating_b, self.rating_a)
    }
}

impl From<RatingPair> for (f64, f64) {
    fn from(pair: RatingPair) -> Self {
        (pair.rating_a, pair.rating_b)
    }
}
