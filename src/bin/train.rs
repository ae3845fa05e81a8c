//! Placeholder training entry point.
//!
//! Reads a parameter file, writes a dummy model artifact into the output
//! directory and prints `{"model_path", "metrics"}` as one JSON line.

use anyhow::{Context, Result};
use model_stubs::cli::{self, TrainArgs};
use model_stubs::json::{read_json, to_line};
use model_stubs::params::{TrainOutput, TrainParams};
use model_stubs::train::train;
use std::path::PathBuf;
use tracing::debug;

/// Application wrapping one training run.
pub struct TrainApp {
    params_path: PathBuf,
    output_dir: PathBuf,
}

impl TrainApp {
    /// Create a new training application.
    pub fn new(args: TrainArgs) -> Self {
        if !args.rest.is_empty() {
            debug!(ignored = ?args.rest, "extra arguments");
        }
        Self {
            params_path: args.params_path,
            output_dir: args.output_dir,
        }
    }

    /// Execute the training stub.
    pub fn run(&self) -> Result<TrainOutput> {
        let params: TrainParams = read_json(&self.params_path)?;
        train(&params, &self.output_dir)
            .with_context(|| format!("training into {}", self.output_dir.display()))
    }
}

fn main() -> Result<()> {
    cli::init_tracing();
    let app = TrainApp::new(cli::parse_args());
    let output = app.run()?;
    println!("{}", to_line(&output)?);
    Ok(())
}
