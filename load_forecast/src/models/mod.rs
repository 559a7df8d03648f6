//! Load models the forecast engine scores feature vectors with
//!
//! The engine only needs a deterministic `FeatureVector -> MW` function.
//! Trained models live behind the `LoadModel` trait; `LinearLoadModel` is a
//! JSON-loadable implementation for running without an external model server.

use crate::error::Result;
use load_math::FeatureVector;
use std::fmt::Debug;

pub mod linear;

pub use linear::LinearLoadModel;

/// A trained model that predicts load in megawatts
pub trait LoadModel: Debug {
    /// Predict the load for one feature vector
    fn predict(&self, features: &FeatureVector) -> Result<f64>;

    /// Predict the load for many feature vectors, preserving input order
    ///
    /// The default scores one vector at a time and stops at the first failure.
    fn predict_batch(&self, features: &[FeatureVector]) -> Result<Vec<f64>> {
        features.iter().map(|f| self.predict(f)).collect()
    }

    /// Name of the model
    fn name(&self) -> &str;
}

impl<M: LoadModel + ?Sized> LoadModel for Box<M> {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        (**self).predict(features)
    }

    fn predict_batch(&self, features: &[FeatureVector]) -> Result<Vec<f64>> {
        (**self).predict_batch(features)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
