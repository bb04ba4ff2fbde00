//! The fixed extract → transform pipeline
//!
//! Three extractors run in a fixed order, then the one transformer. Each
//! step is launched and fully awaited before the next begins; the first
//! failure aborts the whole run. No retries, no rollback, no timeouts.

use crate::cli::output;
use crate::core::{PipelineConfig, StepInvocation, ToolPaths};
use crate::execution::runner::{StepError, StepOutcome, ToolRunner};
use tracing::info;

/// ESPN extractor step, the only one with a subcommand and the optional
/// force-full-extraction flag
pub fn espn_step(config: &PipelineConfig, paths: &ToolPaths) -> StepInvocation {
    let mut args = vec![
        "players-extract".to_string(),
        "--year".to_string(),
        config.year.to_string(),
        "--output-dir".to_string(),
        config.extract_output_dir.display().to_string(),
    ];
    if config.force_full_extraction {
        args.push("--force-full-extraction".to_string());
    }
    StepInvocation::new(paths.espn_extractor(), "espn", args, "ESPN API Extractor")
}

/// Fangraphs extractor step
pub fn fangraphs_step(config: &PipelineConfig, paths: &ToolPaths) -> StepInvocation {
    let args = vec![
        "--year".to_string(),
        config.year.to_string(),
        "--output-dir".to_string(),
        config.extract_output_dir.display().to_string(),
    ];
    StepInvocation::new(
        paths.fangraphs_extractor(),
        "fangraphs-api-extractor",
        args,
        "Fangraphs API Extractor",
    )
}

/// Savant extractor step; Savant calls the year a season
pub fn savant_step(config: &PipelineConfig, paths: &ToolPaths) -> StepInvocation {
    let args = vec![
        "--season".to_string(),
        config.year.to_string(),
        "--output-dir".to_string(),
        config.extract_output_dir.display().to_string(),
    ];
    StepInvocation::new(
        paths.savant_extractor(),
        "savant-extract",
        args,
        "Savant API Extractor",
    )
}

/// Player Universe Transformer step. It auto-discovers its inputs and
/// writes to its own configured output location, so it takes no arguments.
/// It also returns exit code 1 on success, so that code is tolerated.
pub fn universe_step(paths: &ToolPaths) -> StepInvocation {
    StepInvocation::new(
        paths.player_universe_trx(),
        "universe_trx",
        vec![],
        "Player Universe Transformer",
    )
    .tolerating_exit_code_1()
}

/// Run one step with the operator-facing framing around it
async fn run_step(runner: &dyn ToolRunner, invocation: StepInvocation) -> Result<(), StepError> {
    output::step_header(&invocation);
    let outcome = runner.run(&invocation).await?;
    if outcome == StepOutcome::ToleratedFailure {
        info!(
            "{} exit code 1 tolerated per step policy",
            invocation.description
        );
    }
    output::step_completed(&invocation.description);
    Ok(())
}

/// Run all extract processes in the fixed order ESPN → Fangraphs → Savant
pub async fn run_extract(
    config: &PipelineConfig,
    paths: &ToolPaths,
    runner: &dyn ToolRunner,
) -> Result<(), StepError> {
    output::banner("STARTING EXTRACT PROCESSES");

    run_step(runner, espn_step(config, paths)).await?;
    run_step(runner, fangraphs_step(config, paths)).await?;
    run_step(runner, savant_step(config, paths)).await?;

    output::banner("EXTRACT PROCESSES COMPLETED");
    Ok(())
}

/// Run all transform processes (currently just the Player Universe
/// Transformer)
pub async fn run_transform(paths: &ToolPaths, runner: &dyn ToolRunner) -> Result<(), StepError> {
    output::banner("STARTING TRANSFORM PROCESSES");

    run_step(runner, universe_step(paths)).await?;

    output::banner("TRANSFORM PROCESSES COMPLETED");
    Ok(())
}

/// Run the whole pipeline: extract, then transform
pub async fn run(
    config: &PipelineConfig,
    paths: &ToolPaths,
    runner: &dyn ToolRunner,
) -> Result<(), StepError> {
    run_extract(config, paths, runner).await?;
    run_transform(paths, runner).await?;
    Ok(())
}
