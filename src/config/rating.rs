//! Elo tuning parameters

use crate::error::RatingError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_K_FACTOR: f64 = 32.0;
pub const DEFAULT_C_VALUE: f64 = 400.0;
pub const DEFAULT_L_FACTOR: f64 = 16.0;

/// Tuning constants for the Elo calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EloConfig {
    /// Rating points exchanged at full surprise (actual - expected = ±1)
    pub k_factor: f64,
    /// Divisor mapping a rating difference onto the logistic curve
    pub c_value: f64,
    /// Magnitude of the margin bonus under the margin points policy
    pub l_factor: f64,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
            c_value: DEFAULT_C_VALUE,
            l_factor: DEFAULT_L_FACTOR,
        }
    }
}

impl EloConfig {
    /// Smaller swings per game
    pub fn conservative() -> Self {
        Self {
            k_factor: 16.0,
            l_factor: 8.0,
            ..Self::default()
        }
    }

    /// Larger swings per game
    pub fn aggressive() -> Self {
        Self {
            k_factor: 48.0,
            l_factor: 24.0,
            ..Self::default()
        }
    }

    pub fn with_k_factor(mut self, k_factor: impl Into<f64>) -> Self {
        self.k_factor = k_factor.into();
        self
    }

    pub fn with_c_value(mut self, c_value: impl Into<f64>) -> Self {
        self.c_value = c_value.into();
        self
    }

    pub fn with_l_factor(mut self, l_factor: impl Into<f64>) -> Self {
        self.l_factor = l_factor.into();
        self
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: format!("K-factor must be positive, got {}", self.k_factor),
            }
            .into());
        }

        if !self.c_value.is_finite() || self.c_value <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: format!("C-value must be positive, got {}", self.c_value),
            }
            .into());
        }

        if !self.l_factor.is_finite() || self.l_factor < 0.0 {
            return Err(RatingError::ConfigurationError {
                message: format!("L-factor must be non-negative, got {}", self.l_factor),
            }
            .into());
        }

        Ok(())
    }
}
