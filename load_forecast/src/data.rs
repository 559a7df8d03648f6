//! Forecast tables and their export formats

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column header for the date column in exports
pub const DATE_COLUMN: &str = "Date";
/// Column header for the load column in exports
pub const LOAD_COLUMN: &str = "Predicted Load (MW)";

/// One forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    /// Day the load was predicted for
    pub date: NaiveDate,
    /// Predicted load in megawatts
    pub predicted_load_mw: f64,
}

/// Row layout of CSV exports
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Predicted Load (MW)")]
    load: f64,
}

/// Forecast for consecutive days, in ascending date order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastTable {
    rows: Vec<ForecastRow>,
}

impl ForecastTable {
    /// Create a table, checking that dates are consecutive and ascending
    pub fn new(rows: Vec<ForecastRow>) -> Result<Self> {
        for pair in rows.windows(2) {
            if pair[0].date.succ_opt() != Some(pair[1].date) {
                return Err(ForecastError::DataError(format!(
                    "Forecast dates must be consecutive: {} is followed by {}",
                    pair[0].date, pair[1].date
                )));
            }
        }

        Ok(Self { rows })
    }

    /// Create a table from parallel date and load vectors
    pub fn from_parts(dates: Vec<NaiveDate>, loads: Vec<f64>) -> Result<Self> {
        if dates.len() != loads.len() {
            return Err(ForecastError::DataError(format!(
                "Dates length ({}) doesn't match loads length ({})",
                dates.len(),
                loads.len()
            )));
        }

        Self::new(
            dates
                .into_iter()
                .zip(loads)
                .map(|(date, predicted_load_mw)| ForecastRow {
                    date,
                    predicted_load_mw,
                })
                .collect(),
        )
    }

    /// Get the rows
    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    /// Get the first row, if any
    pub fn first(&self) -> Option<&ForecastRow> {
        self.rows.first()
    }

    /// Number of forecast days
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Dates as ISO `YYYY-MM-DD` strings
    pub fn dates(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.date.format("%Y-%m-%d").to_string())
            .collect()
    }

    /// Predicted loads in row order
    pub fn loads(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.predicted_load_mw).collect()
    }

    /// Write the table as CSV with a `Date,Predicted Load (MW)` header
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        if self.rows.is_empty() {
            csv_writer.write_record([DATE_COLUMN, LOAD_COLUMN])?;
        }

        for (date, row) in self.dates().iter().zip(self.rows.iter()) {
            csv_writer.serialize(CsvRow {
                date: date.as_str(),
                load: row.predicted_load_mw,
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Write the table to a CSV file
    pub fn to_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_csv(file)
    }

    /// Render the table as CSV text
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| ForecastError::CsvError(e.to_string()))
    }

    /// Serialize the table to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.rows)?)
    }

    /// Convert the table into a polars DataFrame with the export column names
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let date_series = Series::new(DATE_COLUMN, self.dates());
        let load_series = Series::new(LOAD_COLUMN, self.loads());

        Ok(DataFrame::new(vec![date_series, load_series])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> ForecastTable {
        ForecastTable::from_parts(
            vec![date(2025, 6, 15), date(2025, 6, 16)],
            vec![1234.5, 1300.25],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_gaps() {
        let result = ForecastTable::from_parts(
            vec![date(2025, 6, 15), date(2025, 6, 17)],
            vec![1.0, 2.0],
        );
        assert!(matches!(result, Err(ForecastError::DataError(_))));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let result = ForecastTable::from_parts(vec![date(2025, 6, 15)], vec![1.0, 2.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_csv_columns() {
        let csv = sample().to_csv_string().unwrap();
        assert_eq!(
            csv,
            "Date,Predicted Load (MW)\n2025-06-15,1234.5\n2025-06-16,1300.25\n"
        );
    }

    #[test]
    fn test_empty_csv_has_header() {
        let csv = ForecastTable::default().to_csv_string().unwrap();
        assert_eq!(csv, "Date,Predicted Load (MW)\n");
    }

    #[test]
    fn test_dataframe_shape() {
        let df = sample().to_dataframe().unwrap();
        assert_eq!(df.shape(), (2, 2));
        assert_eq!(df.get_column_names(), vec![DATE_COLUMN, LOAD_COLUMN]);
    }

    #[test]
    fn test_json_contains_dates() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"2025-06-15\""));
        assert!(json.contains("1234.5"));
    }
}
