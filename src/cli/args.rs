//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Generate sortable HTML tables from the source, program and function listings
#[derive(Parser, Debug)]
#[command(name = "gentables")]
#[command(about = "Generate sortable HTML tables from source, program and function listings")]
#[command(version)]
pub struct Args {
    /// Sources table (Filename,Category,Description)
    pub sources: PathBuf,

    /// Programs table (Filename,Type,Category,Description,ExampleFile,NeedsInput)
    pub programs: PathBuf,

    /// Source directory holding leptprotos.h and the ctags `tags` file
    pub source_dir: PathBuf,

    /// Generate standalone HTML pages instead of fragments
    #[arg(short, long)]
    pub standalone: bool,

    /// Basic debugging messages
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Extended debugging messages
    #[arg(short = 'D', long = "Debug")]
    pub extended_debug: bool,

    /// Config file path (defaults to ./gentables.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write every output into this directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Log filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        if self.extended_debug {
            "trace"
        } else if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}
