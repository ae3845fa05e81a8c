//! Library crate backing the `train` and `predict` binaries.
//!
//! Neither binary does real modelling work: training writes a placeholder
//! artifact with fixed metrics, and prediction either hands a feature matrix
//! to a loaded [`predictor::Predictor`] or falls back to naive rules.

pub mod artifact;
pub mod cli;
pub mod error;
pub mod fallback;
pub mod features;
pub mod json;
pub mod params;
pub mod predict;
pub mod predictor;
pub mod train;

pub use error::{Error, Result};
