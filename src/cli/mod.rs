//! CLI module for gentables

mod args;

pub use args::Args;

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::driver::{Driver, GenerationReport, Inputs};
use crate::error::{Error, Result};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();
    init_logging(args.log_level());

    match execute(args) {
        Ok(report) => {
            println!("{}", report.summary());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; RUST_LOG overrides the flag-derived level
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn execute(args: Args) -> Result<GenerationReport> {
    let mut cfg = match &args.config {
        Some(path) if !path.exists() => return Err(Error::PathNotFound(path.clone())),
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };

    // CLI takes precedence
    cfg.merge_cli(args.output_dir.clone(), args.standalone);
    cfg.validate()?;

    tracing::debug!(
        sources = %args.sources.display(),
        programs = %args.programs.display(),
        source_dir = %args.source_dir.display(),
        standalone = cfg.output.standalone,
        "starting"
    );

    let inputs = Inputs::locate(&args.sources, &args.programs, &args.source_dir, &cfg.functions)?;
    let driver = Driver::new(cfg)?;
    driver.run(&inputs)
}
