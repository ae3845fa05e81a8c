//! Placeholder model artifacts.
//!
//! Training writes [`MARKER`] followed by the hyperparameters. The artifact
//! has no further structure; [`ArtifactLoader`] only recognizes the marker.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::predictor::{ModelLoader, Predictor};

/// Prefix of every artifact written by the training stub.
pub const MARKER: &[u8] = b"DUMMY MODEL FOR ";

/// Bytes of a placeholder artifact embedding `hyperparams`.
pub fn placeholder_bytes(hyperparams: &Value) -> Vec<u8> {
    let rendered = hyperparams.to_string();
    let mut bytes = Vec::with_capacity(MARKER.len() + rendered.len());
    bytes.extend_from_slice(MARKER);
    bytes.extend_from_slice(rendered.as_bytes());
    bytes
}

pub fn is_placeholder(bytes: &[u8]) -> bool {
    bytes.starts_with(MARKER)
}

/// Loader used by the `predict` binary.
///
/// No estimator format is defined, so loading always fails; the error tells
/// apart a training-stub artifact from anything else on disk.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArtifactLoader;

impl ModelLoader for ArtifactLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn Predictor>> {
        let bytes = fs::read(path).map_err(|source| Error::io(path, source))?;
        let path = path.to_path_buf();
        if is_placeholder(&bytes) {
            Err(Error::PlaceholderArtifact { path })
        } else {
            Err(Error::UnrecognizedArtifact { path })
        }
    }
}
