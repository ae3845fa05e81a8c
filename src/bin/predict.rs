//! Prediction entry point.
//!
//! Loads the model artifact when one exists and predicts the `inputs` of the
//! input file, falling back to naive rules otherwise. The result is written
//! to the output file and echoed on stdout.

use anyhow::{Context, Result};
use model_stubs::artifact::ArtifactLoader;
use model_stubs::cli::{self, PredictArgs};
use model_stubs::json::{read_json, to_line, write_json};
use model_stubs::params::{PredictInput, PredictOutput};
use model_stubs::predict::predict;
use model_stubs::predictor::ModelLoader;
use std::path::PathBuf;
use tracing::debug;

/// Application wrapping one prediction run.
pub struct PredictApp {
    model_path: PathBuf,
    input_path: PathBuf,
    output_path: PathBuf,
    loader: Option<Box<dyn ModelLoader>>,
}

impl PredictApp {
    /// Create a new prediction application.
    pub fn new(args: PredictArgs) -> Self {
        if !args.rest.is_empty() {
            debug!(ignored = ?args.rest, "extra arguments");
        }
        let loader: Option<Box<dyn ModelLoader>> = if args.no_loader {
            None
        } else {
            Some(Box::new(ArtifactLoader))
        };
        Self {
            model_path: args.model_path,
            input_path: args.input_path,
            output_path: args.output_path,
            loader,
        }
    }

    /// Predict, write the output file and return what was written.
    pub fn run(&self) -> Result<PredictOutput> {
        let payload: PredictInput = read_json(&self.input_path)?;
        let prediction = predict(&self.model_path, &payload.inputs, self.loader.as_deref())
            .context("echoing inputs after the model path failed")?;
        debug!(route = ?prediction.route, count = prediction.predictions.len(), "predicted");

        let output = PredictOutput {
            predictions: prediction.predictions,
        };
        write_json(&self.output_path, &output)?;
        Ok(output)
    }
}

fn main() -> Result<()> {
    cli::init_tracing();
    let app = PredictApp::new(cli::parse_args());
    let output = app.run()?;
    println!("{}", to_line(&output)?);
    Ok(())
}
