use chrono::NaiveDate;
use load_forecast::error::ForecastError;
use load_forecast::{ForecastEngine, ForecastTable, LinearLoadModel, LoadModel};
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn week_table() -> ForecastTable {
    let mut weights = [0.0; 10];
    weights[6] = 10.0; // day
    let engine = ForecastEngine::new(LinearLoadModel::new("day", 1000.0, weights).unwrap());
    engine
        .forecast(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(), 7, 12)
        .unwrap()
}

#[test]
fn test_csv_file_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("electricity_forecast.csv");

    week_table().to_csv_file(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "Date,Predicted Load (MW)");
    assert_eq!(lines[1], "2025-06-15,1150.0");
    assert_eq!(lines[7], "2025-06-21,1210.0");
}

#[test]
fn test_csv_export_to_missing_directory_fails() {
    let result = week_table().to_csv_file("/nonexistent/dir/forecast.csv");
    assert!(matches!(result, Err(ForecastError::IoError(_))));
}

#[test]
fn test_model_from_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"name": "file model", "intercept": 3000.0, "weights": {{"BRPL": 200.0, "weekend": -150.0}}}}"#
    )
    .unwrap();

    let model = LinearLoadModel::from_json_file(file.path()).unwrap();
    assert_eq!(model.name(), "file model");

    let engine = ForecastEngine::new(model);
    // Saturday 2025-06-14, Sunday 2025-06-15, Monday 2025-06-16
    let table = engine
        .forecast(NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(), 3, 12)
        .unwrap();
    assert_eq!(table.loads(), vec![3050.0, 3050.0, 3200.0]);
}

#[test]
fn test_missing_model_file_is_configuration_error() {
    let err = LinearLoadModel::from_json_file("does_not_exist.json").unwrap_err();
    assert!(matches!(err, ForecastError::ConfigurationError(_)));
}
