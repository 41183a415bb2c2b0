//! elo-calc - Elo rating updates for two-participant matches
//!
//! This crate computes updated ratings from a win/loss/draw, from raw
//! scores, or from point totals, with a configurable K-factor, C-value and
//! margin L-factor.

pub mod config;
pub mod error;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingError, RatingResult, Result};
pub use types::*;

// Re-export key components
pub use config::EloConfig;
pub use rating::RatingCalculator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
