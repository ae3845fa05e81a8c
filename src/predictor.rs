//! Seams for an externally provided model.

use std::path::Path;

use ndarray::{Array1, ArrayView2};

use crate::error::Result;

/// A loaded model that maps a feature matrix (one row per sample) to one
/// prediction per row.
pub trait Predictor {
    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Array1<f64>>;
}

/// Turns a model artifact on disk into a [`Predictor`].
pub trait ModelLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn Predictor>>;
}
