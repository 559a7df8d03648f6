//! Linear load model with weights loaded from JSON

use crate::error::{ForecastError, Result};
use crate::models::LoadModel;
use load_math::{FeatureVector, FEATURE_ORDER};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// On-disk layout of a linear model
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LinearModelFile {
    name: Option<String>,
    intercept: f64,
    weights: BTreeMap<String, f64>,
}

/// `load = intercept + sum(weight_i * feature_i)`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearLoadModel {
    /// Name of the model
    name: String,
    /// Constant term in MW
    intercept: f64,
    /// One weight per feature, in `FEATURE_ORDER`
    weights: [f64; 10],
}

impl LinearLoadModel {
    /// Create a model from weights already in feature order
    pub fn new(name: impl Into<String>, intercept: f64, weights: [f64; 10]) -> Result<Self> {
        if !intercept.is_finite() || weights.iter().any(|w| !w.is_finite()) {
            return Err(ForecastError::InvalidParameter(
                "Model coefficients must be finite".to_string(),
            ));
        }

        Ok(Self {
            name: name.into(),
            intercept,
            weights,
        })
    }

    /// Create a model from named weights; features without a weight get 0
    pub fn from_named_weights(
        name: impl Into<String>,
        intercept: f64,
        named: &BTreeMap<String, f64>,
    ) -> Result<Self> {
        let mut weights = [0.0; 10];

        for (feature, weight) in named {
            let idx = FEATURE_ORDER
                .iter()
                .position(|f| f.eq_ignore_ascii_case(feature))
                .ok_or_else(|| {
                    ForecastError::ConfigurationError(format!("Unknown feature '{}'", feature))
                })?;
            weights[idx] = *weight;
        }

        Self::new(name, intercept, weights)
    }

    /// Parse a model from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: LinearModelFile = serde_json::from_str(json)
            .map_err(|e| ForecastError::ConfigurationError(format!("Invalid model file: {}", e)))?;

        Self::from_named_weights(
            file.name.unwrap_or_else(|| "Linear load model".to_string()),
            file.intercept,
            &file.weights,
        )
        .map_err(|e| match e {
            ForecastError::InvalidParameter(msg) => ForecastError::ConfigurationError(msg),
            other => other,
        })
    }

    /// Load a model from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            ForecastError::ConfigurationError(format!(
                "Cannot read model file {}: {}",
                path.display(),
                e
            ))
        })?;

        let model = Self::from_json_str(&json)?;
        tracing::info!(model = %model.name, path = %path.display(), "load model ready");
        Ok(model)
    }

    /// Serialize the model to JSON
    pub fn to_json(&self) -> Result<String> {
        let file = LinearModelFile {
            name: Some(self.name.clone()),
            intercept: self.intercept,
            weights: FEATURE_ORDER
                .iter()
                .zip(self.weights.iter())
                .map(|(f, w)| (f.to_string(), *w))
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// The constant term
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Weights in `FEATURE_ORDER`
    pub fn weights(&self) -> &[f64; 10] {
        &self.weights
    }
}

impl LoadModel for LinearLoadModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        let load = features
            .as_array()
            .iter()
            .zip(self.weights.iter())
            .fold(self.intercept, |acc, (x, w)| acc + x * w);

        if !load.is_finite() {
            return Err(ForecastError::ScoringError(format!(
                "{} produced a non-finite load",
                self.name
            )));
        }

        Ok(load)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use load_math::build_features;

    #[test]
    fn test_predict_is_dot_product() {
        let mut weights = [0.0; 10];
        weights[0] = 100.0; // BRPL
        weights[5] = 10.0; // hour
        weights[9] = -50.0; // weekend
        let model = LinearLoadModel::new("test", 1000.0, weights).unwrap();

        // Sunday
        let sunday = build_features(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(), 12);
        assert_relative_eq!(model.predict(&sunday).unwrap(), 1000.0 + 100.0 + 120.0 - 50.0);

        // Monday
        let monday = build_features(NaiveDate::from_ymd_opt(2025, 6, 16).unwrap(), 12);
        assert_relative_eq!(model.predict(&monday).unwrap(), 1220.0);
    }

    #[test]
    fn test_from_json_str_named_weights() {
        let json = r#"{"name": "delhi", "intercept": 2500.0, "weights": {"month": 20.0, "hour": 5.0}}"#;
        let model = LinearLoadModel::from_json_str(json).unwrap();

        assert_eq!(model.name(), "delhi");
        assert_relative_eq!(model.intercept(), 2500.0);
        assert_relative_eq!(model.weights()[5], 5.0);
        assert_relative_eq!(model.weights()[7], 20.0);
        assert_relative_eq!(model.weights()[0], 0.0);
    }

    #[test]
    fn test_unknown_feature_is_configuration_error() {
        let json = r#"{"intercept": 1.0, "weights": {"temperature": 3.0}}"#;
        let err = LinearLoadModel::from_json_str(json).unwrap_err();
        assert!(matches!(err, ForecastError::ConfigurationError(_)));
    }

    #[test]
    fn test_malformed_json_is_configuration_error() {
        let err = LinearLoadModel::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ForecastError::ConfigurationError(_)));
    }

    #[test]
    fn test_non_finite_coefficients_rejected() {
        assert!(LinearLoadModel::new("bad", f64::NAN, [0.0; 10]).is_err());
    }

    #[test]
    fn test_json_round_trip_preserves_weights() {
        let model = LinearLoadModel::new("rt", 10.0, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]).unwrap();
        let parsed = LinearLoadModel::from_json_str(&model.to_json().unwrap()).unwrap();
        assert_eq!(parsed, model);
    }
}
