//! JSON documents read and written by the binaries.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Framework recorded in the artifact name when the parameters omit one.
pub const DEFAULT_FRAMEWORK: &str = "sklearn";

/// Parameters consumed by the training stub. Nothing here is validated.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TrainParams {
    /// Dataset identifier, only echoed to the log.
    #[serde(default, rename = "datasetId", alias = "dataset_id")]
    pub dataset_id: Option<Value>,
    /// Free-form hyperparameters embedded in the artifact.
    #[serde(default = "empty_object")]
    pub hyperparams: Value,
    /// Any JSON value; `None` only when the key is absent.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub framework: Option<Value>,
}

impl TrainParams {
    /// Framework name as it appears in the artifact name: strings verbatim,
    /// other values as JSON text, [`DEFAULT_FRAMEWORK`] when absent.
    pub fn framework(&self) -> Cow<'_, str> {
        match &self.framework {
            None => Cow::Borrowed(DEFAULT_FRAMEWORK),
            Some(Value::String(name)) => Cow::Borrowed(name.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }
}

/// Keeps an explicit `null` as `Some(Value::Null)`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Fixed metrics reported by every training run.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Metrics {
    #[serde(rename = "MSE")]
    pub mse: f64,
    #[serde(rename = "MAE")]
    pub mae: f64,
}

impl Metrics {
    pub const PLACEHOLDER: Metrics = Metrics {
        mse: 0.123,
        mae: 0.045,
    };
}

/// Document printed by the training stub.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TrainOutput {
    pub model_path: String,
    pub metrics: Metrics,
}

/// Document read by the prediction stub.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct PredictInput {
    #[serde(default)]
    pub inputs: Vec<Value>,
}

/// Document written and printed by the prediction stub.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PredictOutput {
    pub predictions: Vec<Value>,
}
