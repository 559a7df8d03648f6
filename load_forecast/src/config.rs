//! Forecasting configuration
//!
//! Values come from `ForecastConfig::default()` and can be overridden through
//! `GRIDCAST_*` environment variables. Unparsable values keep the default.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// The only calendar year the shipped model is valid for
pub const DEFAULT_TARGET_YEAR: i32 = 2025;
/// Hour of day assumed when a request does not name one
pub const DEFAULT_HOUR: u32 = 12;

/// Settings for the forecast engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Year every anchor date is moved into before scoring
    pub target_year: i32,
    /// Hour used for forecasts without an explicit hour
    pub default_hour: u32,
    /// Optional upper bound on `horizon_days`; unbounded when `None`
    pub max_horizon_days: Option<u32>,
    /// Location of the model weights
    pub model_path: Option<PathBuf>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            target_year: DEFAULT_TARGET_YEAR,
            default_hour: DEFAULT_HOUR,
            max_horizon_days: None,
            model_path: None,
        }
    }
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

impl ForecastConfig {
    /// Build config from environment variables on top of the defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            target_year: env_parsed("GRIDCAST_TARGET_YEAR", defaults.target_year),
            default_hour: env_parsed("GRIDCAST_DEFAULT_HOUR", defaults.default_hour),
            max_horizon_days: env_opt("GRIDCAST_MAX_HORIZON_DAYS")
                .and_then(|v| v.parse().ok())
                .or(defaults.max_horizon_days),
            model_path: env_opt("GRIDCAST_MODEL_PATH").map(PathBuf::from),
        }
    }

    /// Use a different target year
    pub fn with_target_year(mut self, year: i32) -> Self {
        self.target_year = year;
        self
    }

    /// Use a different model file
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(path.into());
        self
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.default_hour > 23 {
            return Err(ForecastError::ConfigurationError(format!(
                "default hour must be between 0 and 23, got {}",
                self.default_hour
            )));
        }

        if self.max_horizon_days == Some(0) {
            return Err(ForecastError::ConfigurationError(
                "max horizon must be at least one day".to_string(),
            ));
        }

        Ok(())
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!(
            target_year = self.target_year,
            default_hour = self.default_hour,
            max_horizon_days = ?self.max_horizon_days,
            model = %self
                .model_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string()),
            "forecast config loaded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ForecastConfig::default();
        assert_eq!(config.target_year, 2025);
        assert_eq!(config.default_hour, 12);
        assert!(config.model_path.is_none());
        assert_eq!(config.max_horizon_days, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_hour() {
        let config = ForecastConfig {
            default_hour: 24,
            ..ForecastConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ForecastError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_horizon() {
        let config = ForecastConfig {
            max_horizon_days: Some(0),
            ..ForecastConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = ForecastConfig::default()
            .with_target_year(2026)
            .with_model_path("weights.json");
        assert_eq!(config.target_year, 2026);
        assert_eq!(config.model_path, Some(PathBuf::from("weights.json")));
    }
}
