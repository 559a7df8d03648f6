//! Today's load and the week-ahead outlook

use crate::data::{ForecastRow, ForecastTable};
use crate::engine::ForecastEngine;
use crate::error::{ForecastError, Result};
use crate::metrics::ForecastSummary;
use crate::models::LoadModel;
use chrono::NaiveDate;

/// Days covered by the outlook table
pub const OUTLOOK_DAYS: u32 = 7;

/// Snapshot shown when a session starts
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Forecast for today
    pub today: ForecastRow,
    /// Forecast for today and the following six days
    pub outlook: ForecastTable,
    /// Statistics over the outlook
    pub summary: ForecastSummary,
}

impl Dashboard {
    /// Build the dashboard for `today` at `hour`
    pub fn build<M: LoadModel>(engine: &ForecastEngine<M>, today: NaiveDate, hour: u32) -> Result<Self> {
        let outlook = engine.forecast(today, OUTLOOK_DAYS, hour)?;
        let today_row = outlook
            .first()
            .cloned()
            .ok_or_else(|| ForecastError::DataError("Outlook is empty".to_string()))?;
        let summary = ForecastSummary::from_table(&outlook)?;

        Ok(Self {
            today: today_row,
            outlook,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LinearLoadModel;

    #[test]
    fn test_dashboard_covers_a_week() {
        let mut weights = [0.0; 10];
        weights[9] = 100.0; // weekend
        let engine = ForecastEngine::new(LinearLoadModel::new("w", 2000.0, weights).unwrap());

        // Monday 2025-06-09
        let today = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
        let dashboard = Dashboard::build(&engine, today, 12).unwrap();

        assert_eq!(dashboard.outlook.len(), 7);
        assert_eq!(dashboard.today.date, today);
        assert_eq!(dashboard.today.predicted_load_mw, 2000.0);
        assert_eq!(dashboard.summary.max_mw, 2100.0);
        assert_eq!(
            dashboard.summary.peak_date,
            NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()
        );
    }
}
