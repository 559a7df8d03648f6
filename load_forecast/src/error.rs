//! Error types for the load_forecast crate

use load_math::MathError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Custom error types for the load_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// A date could not be placed in the supported forecasting year
    #[error("Date error: {0}")]
    DateError(String),

    /// The load model failed to score a feature vector
    #[error("Scoring error: {0}")]
    ScoringError(String),

    /// The load model or its settings could not be loaded
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to forecast table contents
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error writing CSV output
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Error encoding or decoding JSON
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<MathError> for ForecastError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InvalidDate(msg) => ForecastError::DateError(msg),
            MathError::InvalidInput(msg) => ForecastError::InvalidParameter(msg),
        }
    }
}

impl From<PolarsError> for ForecastError {
    fn from(err: PolarsError) -> Self {
        ForecastError::PolarsError(err.to_string())
    }
}

impl From<csv::Error> for ForecastError {
    fn from(err: csv::Error) -> Self {
        ForecastError::CsvError(err.to_string())
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::JsonError(err.to_string())
    }
}
