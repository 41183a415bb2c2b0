//! Error types for the rating calculator
//!
//! Domain failures are modelled with thiserror; configuration loading and
//! the binary use the anyhow-based `Result` alias.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Result of a rating computation
pub type RatingResult<T> = std::result::Result<T, RatingError>;

/// Validation failures raised by rating computations and configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    /// Scores outside [0, 1], or summing to 1.1 or more
    #[error("Invalid scores: {score_a} and {score_b}")]
    InvalidScores { score_a: f64, score_b: f64 },

    /// An outcome or policy selector outside its enumerated set
    #[error("Invalid {name}: {value}")]
    InvalidArgument { name: &'static str, value: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl RatingError {
    pub(crate) fn invalid_argument(name: &'static str, value: impl ToString) -> Self {
        Self::InvalidArgument {
            name,
            value: value.to_string(),
        }
    }
}
