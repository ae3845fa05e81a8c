//! Placeholder training: writes a dummy artifact and reports fixed metrics.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::artifact::placeholder_bytes;
use crate::error::{Error, Result};
use crate::params::{Metrics, TrainOutput, TrainParams};

const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

/// File name of the artifact for `framework` trained at `at`.
pub fn artifact_name(framework: &str, at: DateTime<Utc>) -> String {
    format!("model-{}-{}.bin", framework, at.format(TIMESTAMP_FORMAT))
}

/// Run the training stub now, writing into `output_dir`.
pub fn train(params: &TrainParams, output_dir: &Path) -> Result<TrainOutput> {
    train_at(params, output_dir, Utc::now())
}

/// Same as [`train`] with an explicit timestamp.
pub fn train_at(params: &TrainParams, output_dir: &Path, at: DateTime<Utc>) -> Result<TrainOutput> {
    info!(
        dataset = ?params.dataset_id,
        framework = %params.framework(),
        hyperparams = %params.hyperparams,
        "starting placeholder training"
    );

    fs::create_dir_all(output_dir).map_err(|source| Error::io(output_dir, source))?;
    let model_path = output_dir.join(artifact_name(&params.framework(), at));
    fs::write(&model_path, placeholder_bytes(&params.hyperparams))
        .map_err(|source| Error::io(&model_path, source))?;

    info!(model = %model_path.display(), "wrote artifact");
    Ok(TrainOutput {
        model_path: model_path.to_string_lossy().into_owned(),
        metrics: Metrics::PLACEHOLDER,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::is_placeholder;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn name_embeds_framework_and_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(artifact_name("sklearn", at), "model-sklearn-20240305T070809.bin");
    }

    #[test]
    fn creates_nested_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("a").join("b");
        let params = TrainParams::default();
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let out = train_at(&params, &out_dir, at).unwrap();
        assert!(out.model_path.ends_with("model-sklearn-20240101T000000.bin"));
        let bytes = fs::read(&out.model_path).unwrap();
        assert!(is_placeholder(&bytes));
    }

    #[test]
    fn artifact_carries_hyperparams() {
        let dir = tempfile::tempdir().unwrap();
        let params: TrainParams =
            serde_json::from_value(json!({"framework": "pytorch", "hyperparams": {"lr": 0.1}}))
                .unwrap();
        let out = train(&params, dir.path()).unwrap();
        assert!(out.model_path.contains("model-pytorch-"));
        assert_eq!(fs::read(&out.model_path).unwrap(), b"DUMMY MODEL FOR {\"lr\":0.1}".to_vec());
        assert_eq!(out.metrics, Metrics::PLACEHOLDER);
    }

    #[test]
    fn numeric_framework_names_the_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let params: TrainParams = serde_json::from_value(json!({"framework": 3})).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let out = train_at(&params, dir.path(), at).unwrap();
        assert!(out.model_path.ends_with("model-3-20240101T000000.bin"));
    }
}
