//! Error type shared by the library modules.

use std::io;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// Errors raised by the training and prediction stubs.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("{} is a placeholder artifact with no estimator", .path.display())]
    PlaceholderArtifact { path: PathBuf },

    #[error("{} is not a recognized model artifact", .path.display())]
    UnrecognizedArtifact { path: PathBuf },

    #[error("input {index} is not numeric: {value}")]
    NotNumeric { index: usize, value: Value },

    #[error("ragged input rows: row 0 has {expected} columns, row {row} has {found}")]
    RaggedRows {
        expected: usize,
        row: usize,
        found: usize,
    },

    #[error("feature matrix shape: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("predictor failed: {0}")]
    Predictor(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
