//! Prediction with a loaded model, falling back to naive rules.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::fallback::{identity, persistence};
use crate::features::feature_matrix;
use crate::predictor::ModelLoader;

/// Which path produced a set of predictions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// The loaded model answered.
    Model,
    /// The model path failed; inputs were echoed as floats.
    Identity,
    /// No loader or no artifact on disk; inputs were shifted by one.
    Persistence,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub route: Route,
    pub predictions: Vec<Value>,
}

/// Predict `inputs` with the model at `model_path`.
///
/// With a loader and an existing artifact the model is tried first; any
/// failure along that path is logged and replaced by the identity rule.
/// Without either, the persistence rule applies. The only error returned is
/// an input the identity rule cannot read as a number.
pub fn predict(
    model_path: &Path,
    inputs: &[Value],
    loader: Option<&dyn ModelLoader>,
) -> Result<Prediction> {
    let loader = match loader {
        Some(loader) if model_path.exists() => loader,
        Some(_) => {
            debug!(model = %model_path.display(), "no artifact on disk, using persistence");
            return Ok(persisted(inputs));
        }
        None => {
            debug!("no model loader, using persistence");
            return Ok(persisted(inputs));
        }
    };

    match run_model(loader, model_path, inputs) {
        Ok(predictions) => Ok(Prediction {
            route: Route::Model,
            predictions,
        }),
        Err(err) => {
            warn!(model = %model_path.display(), error = %err, "model prediction failed, echoing inputs");
            Ok(Prediction {
                route: Route::Identity,
                predictions: identity(inputs)?,
            })
        }
    }
}

fn persisted(inputs: &[Value]) -> Prediction {
    Prediction {
        route: Route::Persistence,
        predictions: persistence(inputs),
    }
}

fn run_model(loader: &dyn ModelLoader, model_path: &Path, inputs: &[Value]) -> Result<Vec<Value>> {
    let model = loader.load(model_path)?;
    let features = feature_matrix(inputs)?;
    let output = model.predict(features.view())?;
    if output.len() != features.nrows() {
        return Err(Error::Predictor(format!(
            "expected {} predictions, got {}",
            features.nrows(),
            output.len()
        )));
    }
    Ok(output.iter().copied().map(Value::from).collect())
}
