//! # Load Forecast
//!
//! Day-ahead electricity load forecasting over a point-in-time regression model.
//!
//! ## Features
//!
//! - Feature vectors built per calendar day (via `load_math`)
//! - A forecast engine that scores a `LoadModel` across a horizon of days
//! - Anchor dates moved into the single year the model is valid for
//! - Forecast tables with CSV, JSON and polars `DataFrame` export
//! - Summary statistics and a week-ahead dashboard
//!
//! ## Quick Start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use load_forecast::models::LinearLoadModel;
//! use load_forecast::ForecastEngine;
//!
//! # fn main() -> load_forecast::error::Result<()> {
//! // Load model weights
//! let model = LinearLoadModel::from_json_file("models/delhi_load_linear.json")?;
//! let engine = ForecastEngine::new(model);
//!
//! // Forecast a week at noon
//! let start = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
//! let table = engine.forecast(start, 7, 12)?;
//! table.to_csv_file("electricity_forecast.csv")?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dashboard;
pub mod data;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod models;

// Re-export commonly used types
pub use crate::config::ForecastConfig;
pub use crate::dashboard::Dashboard;
pub use crate::data::{ForecastRow, ForecastTable};
pub use crate::engine::{ForecastEngine, ForecastRequest};
pub use crate::error::ForecastError;
pub use crate::metrics::ForecastSummary;
pub use crate::models::{LinearLoadModel, LoadModel};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
