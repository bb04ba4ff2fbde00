//! Run configuration and tool path resolution

use crate::cli::Cli;
use anyhow::{ensure, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable overriding where the extractor/transformer tool
/// projects live
pub const TOOLS_DIR_VAR: &str = "MTBL_TOOLS_DIR";

/// Environment variable overriding where the shared resources tree lives
pub const RESOURCES_DIR_VAR: &str = "MTBL_RESOURCES_DIR";

const DEFAULT_TOOLS_DIR: &str = "/Users/Shared/BaseballHQ/tools";
const DEFAULT_RESOURCES_DIR: &str = "/Users/Shared/BaseballHQ/resources";

/// Configuration for one pipeline run, built from the CLI.
///
/// Immutable for the duration of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// League year passed to each extractor
    pub year: u16,

    /// Force full ESPN extraction, bypassing the GraphQL optimization
    pub force_full_extraction: bool,

    /// Output directory passed to all three extractors
    pub extract_output_dir: PathBuf,

    /// Output directory for transform processes. Informational only; the
    /// transformer writes to its own configured location.
    pub transform_output_dir: PathBuf,
}

impl PipelineConfig {
    /// Build the run configuration, filling unset directories from the
    /// resolved tool paths. Both output directories must already exist.
    pub fn from_cli(cli: &Cli, paths: &ToolPaths) -> Result<Self> {
        let extract_output_dir = cli
            .extract_output_dir
            .clone()
            .unwrap_or_else(|| paths.default_extract_output_dir());
        let transform_output_dir = cli
            .transform_output_dir
            .clone()
            .unwrap_or_else(|| paths.default_transform_output_dir());

        ensure!(
            extract_output_dir.is_dir(),
            "extract output directory does not exist: {}",
            extract_output_dir.display()
        );
        ensure!(
            transform_output_dir.is_dir(),
            "transform output directory does not exist: {}",
            transform_output_dir.display()
        );

        Ok(Self {
            year: cli.year,
            force_full_extraction: cli.force_full_extraction(),
            extract_output_dir,
            transform_output_dir,
        })
    }
}

/// Locations of the sibling tool projects and the resources tree.
///
/// Resolved once at startup from the environment (a `.env` file is honored)
/// so the orchestrator is portable across machines instead of hardcoding
/// deployment paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    tools_dir: PathBuf,
    resources_dir: PathBuf,
}

impl ToolPaths {
    pub fn new(tools_dir: PathBuf, resources_dir: PathBuf) -> Self {
        Self {
            tools_dir,
            resources_dir,
        }
    }

    /// Resolve from the process environment, falling back to the
    /// BaseballHQ deployment defaults.
    pub fn from_env() -> Self {
        Self::resolve(|key| env::var(key).ok())
    }

    fn resolve(get: impl Fn(&str) -> Option<String>) -> Self {
        let tools_dir = get(TOOLS_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TOOLS_DIR));
        let resources_dir = get(RESOURCES_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCES_DIR));
        Self::new(tools_dir, resources_dir)
    }

    pub fn espn_extractor(&self) -> PathBuf {
        self.tools_dir.join("_extract").join("ESPN_API_Extractor")
    }

    pub fn fangraphs_extractor(&self) -> PathBuf {
        self.tools_dir
            .join("_extract")
            .join("Fangraphs_API_Extractor")
    }

    pub fn savant_extractor(&self) -> PathBuf {
        self.tools_dir.join("_extract").join("Savant_API_Extractor")
    }

    pub fn player_universe_trx(&self) -> PathBuf {
        self.tools_dir
            .join("_transform")
            .join("Player_Universe_Trx")
    }

    pub fn default_extract_output_dir(&self) -> PathBuf {
        self.resources_dir.join("extract")
    }

    pub fn default_transform_output_dir(&self) -> PathBuf {
        self.resources_dir.join("transform")
    }
}
