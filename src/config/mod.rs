//! Configuration management for the rating calculator
//!
//! Holds the Elo tuning constants and the TOML-backed settings used by the
//! command-line front end.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use rating::EloConfig;
