//! # Load Math
//!
//! Calendar and feature calculations for electricity load forecasting.
//! This crate turns calendar dates into the fixed-order numeric feature
//! vectors the load model is scored on, and provides the date arithmetic
//! the forecast engine needs.

use thiserror::Error;

pub mod calendar;
pub mod features;

pub use calendar::{consecutive_days, renormalize_year};
pub use features::{build_features, build_features_for_station, FeatureVector, Station, FEATURE_ORDER};

/// Errors that can occur in calendar and feature calculations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for load math operations
pub type Result<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::InvalidDate("2025-02-29".to_string());
        assert_eq!(err.to_string(), "Invalid date: 2025-02-29");
    }
}
