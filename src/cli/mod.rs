//! Command-line interface

pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// MTBL extract-transform orchestrator
#[derive(Debug, Parser, Clone)]
#[command(name = "mtbl-et")]
#[command(version = "0.1.0")]
#[command(about = "Runs the MTBL extract and transform pipeline", long_about = None)]
pub struct Cli {
    /// League year to extract
    #[arg(long, default_value_t = 2025)]
    pub year: u16,

    /// Force full ESPN extraction, bypassing GraphQL optimization (default)
    #[arg(long, overrides_with = "no_force_full_extraction")]
    force_full_extraction: bool,

    /// Let the ESPN extractor use its incremental GraphQL path
    #[arg(long, overrides_with = "force_full_extraction")]
    no_force_full_extraction: bool,

    /// Output directory for extract processes
    /// [default: $MTBL_RESOURCES_DIR/extract]
    #[arg(long, value_parser = parse_existing_dir)]
    pub extract_output_dir: Option<PathBuf>,

    /// Output directory for transform processes (informational only)
    /// [default: $MTBL_RESOURCES_DIR/transform]
    #[arg(long, value_parser = parse_existing_dir)]
    pub transform_output_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }

    /// Effective value of the `--force-full-extraction` /
    /// `--no-force-full-extraction` pair. Defaults to true.
    pub fn force_full_extraction(&self) -> bool {
        !self.no_force_full_extraction
    }
}

/// Validate that a directory argument names an existing directory
fn parse_existing_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("directory does not exist: {}", s))
    }
}

use std::ffi::OsString;
