//! CLI output formatting
//!
//! The heavy `=` banners match what operators of the previous tooling are
//! used to seeing in their terminal scrollback.

use crate::core::{PipelineConfig, StepInvocation};
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");

const RULE_WIDTH: usize = 80;

/// Print a horizontal rule
pub fn rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Print a section banner
pub fn banner(title: &str) {
    println!();
    rule();
    println!("{}", style(title).bold());
    rule();
}

/// Print the startup banner with the run configuration summary
pub fn config_summary(config: &PipelineConfig) {
    banner("MTBL EXTRACT-TRANSFORM ORCHESTRATOR");
    println!("Year: {}", style(config.year).cyan());
    println!(
        "Force Full Extraction: {}",
        style(config.force_full_extraction).cyan()
    );
    println!(
        "Extract Output: {}",
        style(config.extract_output_dir.display()).cyan()
    );
    println!(
        "Transform Output: {}",
        style(config.transform_output_dir.display()).cyan()
    );
    rule();
}

/// Print the framing lines before a step is launched
pub fn step_header(invocation: &StepInvocation) {
    println!();
    rule();
    println!("{} Running: {}", ROCKET, style(&invocation.description).bold());
    println!("Directory: {}", invocation.tool_dir.display());
    println!("Command: {}", style(invocation.command_line()).dim());
    rule();
    println!();
}

/// Print the completion line after a step succeeds
pub fn step_completed(description: &str) {
    println!(
        "\n{} {} completed {}\n",
        CHECK,
        style(description).bold(),
        style("successfully").green()
    );
}

/// Print a failure message to the error stream
pub fn failure(message: &str) {
    eprintln!("\n{} {}\n", CROSS, style(message).red());
}
