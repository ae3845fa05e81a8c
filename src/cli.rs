//! Command-line contract shared by the binaries.
//!
//! Both programs take positional arguments only. When any are missing they
//! print `{"error":"missing args"}` on stdout and exit with status 2.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Payload printed when positional arguments are missing.
pub const MISSING_ARGS: &str = "missing args";

/// Exit status for usage errors.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Write a placeholder model artifact and report fixed metrics.
#[derive(Parser, Debug, Clone)]
#[command(name = "train", version)]
pub struct TrainArgs {
    /// JSON file with `datasetId`, `hyperparams` and `framework`
    pub params_path: PathBuf,

    /// Directory receiving the artifact (created if missing)
    pub output_dir: PathBuf,

    /// Extra positionals, accepted and ignored
    #[arg(hide = true)]
    pub rest: Vec<OsString>,
}

/// Predict from a model artifact, falling back to naive rules.
#[derive(Parser, Debug, Clone)]
#[command(name = "predict", version)]
pub struct PredictArgs {
    /// Model artifact to load
    pub model_path: PathBuf,

    /// JSON file of the form {"inputs": [...]}
    pub input_path: PathBuf,

    /// Where to write {"predictions": [...]}
    pub output_path: PathBuf,

    /// Extra positionals, accepted and ignored
    #[arg(hide = true)]
    pub rest: Vec<OsString>,

    /// Skip the model loader and always use the persistence rule
    #[arg(long)]
    pub no_loader: bool,
}

/// Why argument parsing did not produce a value.
#[derive(Debug)]
pub enum ArgsError {
    /// One or more positional arguments were absent.
    Missing,
    /// Anything else clap reports, including help and version requests.
    Clap(clap::Error),
}

/// Parse `args` (program name first) into `T`.
pub fn try_args<T, I, A>(args: I) -> Result<T, ArgsError>
where
    T: Parser,
    I: IntoIterator<Item = A>,
    A: Into<OsString> + Clone,
{
    T::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::MissingRequiredArgument
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ArgsError::Missing,
        _ => ArgsError::Clap(err),
    })
}

/// Parse the process arguments, exiting on failure.
pub fn parse_args<T: Parser>() -> T {
    match try_args(std::env::args_os()) {
        Ok(args) => args,
        Err(ArgsError::Missing) => {
            println!("{}", json!({ "error": MISSING_ARGS }));
            std::process::exit(USAGE_EXIT_CODE);
        }
        Err(ArgsError::Clap(err)) => err.exit(),
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the `warn`
/// default; stdout stays reserved for JSON.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
