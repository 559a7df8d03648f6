//! Summary statistics over a forecast table

use crate::data::ForecastTable;
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use statrs::statistics::Statistics;

/// Descriptive statistics of the predicted loads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSummary {
    /// Number of forecast days
    pub days: usize,
    /// Mean predicted load (MW)
    pub mean_mw: f64,
    /// Lowest predicted load (MW)
    pub min_mw: f64,
    /// Highest predicted load (MW)
    pub max_mw: f64,
    /// Population standard deviation (MW)
    pub std_dev_mw: f64,
    /// First day with the highest predicted load
    pub peak_date: NaiveDate,
}

impl ForecastSummary {
    /// Summarize a non-empty forecast table
    pub fn from_table(table: &ForecastTable) -> Result<Self> {
        let peak = table
            .rows()
            .iter()
            .reduce(|best, row| {
                if row.predicted_load_mw > best.predicted_load_mw {
                    row
                } else {
                    best
                }
            })
            .ok_or_else(|| ForecastError::DataError("Cannot summarize an empty forecast".to_string()))?;

        let loads = table.loads();

        Ok(Self {
            days: loads.len(),
            mean_mw: Statistics::mean(loads.iter()),
            min_mw: Statistics::min(loads.iter()),
            max_mw: Statistics::max(loads.iter()),
            std_dev_mw: Statistics::population_std_dev(loads.iter()),
            peak_date: peak.date,
        })
    }
}

impl std::fmt::Display for ForecastSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Summary ({} days):", self.days)?;
        writeln!(f, "  Mean:    {:.2} MW", self.mean_mw)?;
        writeln!(f, "  Min:     {:.2} MW", self.min_mw)?;
        writeln!(f, "  Max:     {:.2} MW", self.max_mw)?;
        writeln!(f, "  Std Dev: {:.2} MW", self.std_dev_mw)?;
        writeln!(f, "  Peak:    {}", self.peak_date)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_of_known_values() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let dates = load_math::consecutive_days(start, 4).unwrap();
        let table = ForecastTable::from_parts(dates, vec![10.0, 40.0, 20.0, 30.0]).unwrap();

        let summary = ForecastSummary::from_table(&table).unwrap();
        assert_eq!(summary.days, 4);
        assert_relative_eq!(summary.mean_mw, 25.0);
        assert_relative_eq!(summary.min_mw, 10.0);
        assert_relative_eq!(summary.max_mw, 40.0);
        assert_relative_eq!(summary.std_dev_mw, 125.0_f64.sqrt());
        assert_eq!(summary.peak_date, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
        assert!(summary.to_string().contains("Max:     40.00 MW"));
    }

    #[test]
    fn test_empty_table_is_error() {
        assert!(ForecastSummary::from_table(&ForecastTable::default()).is_err());
    }
}
