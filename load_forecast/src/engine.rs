//! Forecast engine: scores the load model across a horizon of days

use crate::config::ForecastConfig;
use crate::data::{ForecastRow, ForecastTable};
use crate::error::{ForecastError, Result};
use crate::models::LoadModel;
use chrono::NaiveDate;
use load_math::{build_features, consecutive_days, renormalize_year};
use serde::{Deserialize, Serialize};

/// A structured forecast request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// First day of the forecast
    pub anchor_date: NaiveDate,
    /// Number of consecutive days, at least 1
    pub horizon_days: u32,
    /// Hour of day (0-23) every day is scored at
    pub hour: u32,
}

impl ForecastRequest {
    /// Create a new forecast request
    pub fn new(anchor_date: NaiveDate, horizon_days: u32, hour: u32) -> Self {
        Self {
            anchor_date,
            horizon_days,
            hour,
        }
    }

    /// Whether the request asks for a single day
    pub fn is_single_day(&self) -> bool {
        self.horizon_days == 1
    }
}

/// Runs a load model over consecutive days
#[derive(Debug)]
pub struct ForecastEngine<M: LoadModel> {
    model: M,
    config: ForecastConfig,
}

impl<M: LoadModel> ForecastEngine<M> {
    /// Create an engine with the default configuration
    pub fn new(model: M) -> Self {
        Self::with_config(model, ForecastConfig::default())
    }

    /// Create an engine with an explicit configuration
    pub fn with_config(model: M, config: ForecastConfig) -> Self {
        Self { model, config }
    }

    /// Get the model
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get the configuration
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Move a date into the supported forecasting year
    pub fn normalize_anchor(&self, anchor_date: NaiveDate) -> Result<NaiveDate> {
        let normalized = renormalize_year(anchor_date, self.config.target_year)?;
        if normalized != anchor_date {
            tracing::info!(
                requested = %anchor_date,
                scored = %normalized,
                "anchor date moved into the supported forecast year"
            );
        }
        Ok(normalized)
    }

    fn check_horizon(&self, horizon_days: u32) -> Result<()> {
        if horizon_days == 0 {
            return Err(ForecastError::InvalidParameter(
                "Horizon must be at least one day".to_string(),
            ));
        }

        if let Some(max) = self.config.max_horizon_days {
            if horizon_days > max {
                return Err(ForecastError::InvalidParameter(format!(
                    "Horizon of {} days exceeds the maximum of {}",
                    horizon_days, max
                )));
            }
        }

        Ok(())
    }

    /// Forecast `horizon_days` consecutive days starting at `anchor_date`
    ///
    /// The model is scored once per day in ascending date order. Any scoring
    /// failure fails the whole forecast.
    pub fn forecast(
        &self,
        anchor_date: NaiveDate,
        horizon_days: u32,
        hour: u32,
    ) -> Result<ForecastTable> {
        self.check_horizon(horizon_days)?;

        let start = self.normalize_anchor(anchor_date)?;
        let dates = consecutive_days(start, horizon_days as usize)?;

        let mut rows = Vec::with_capacity(dates.len());
        for date in dates {
            let features = build_features(date, hour);
            let load = self.model.predict(&features).map_err(|e| match e {
                ForecastError::ScoringError(msg) => {
                    ForecastError::ScoringError(format!("{}: {}", date, msg))
                }
                other => other,
            })?;

            tracing::debug!(%date, hour, load, model = self.model.name(), "scored");
            rows.push(ForecastRow {
                date,
                predicted_load_mw: load,
            });
        }

        ForecastTable::new(rows)
    }

    /// Forecast a structured request
    pub fn forecast_request(&self, request: &ForecastRequest) -> Result<ForecastTable> {
        self.forecast(request.anchor_date, request.horizon_days, request.hour)
    }

    /// Forecast with a single batched model call
    ///
    /// Produces the same table as `forecast` when the model's batch scoring
    /// preserves order.
    pub fn forecast_batched(
        &self,
        anchor_date: NaiveDate,
        horizon_days: u32,
        hour: u32,
    ) -> Result<ForecastTable> {
        self.check_horizon(horizon_days)?;

        let start = self.normalize_anchor(anchor_date)?;
        let dates = consecutive_days(start, horizon_days as usize)?;
        let features: Vec<_> = dates.iter().map(|d| build_features(*d, hour)).collect();
        let loads = self.model.predict_batch(&features)?;

        ForecastTable::from_parts(dates, loads)
    }
}
