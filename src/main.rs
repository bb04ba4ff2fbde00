use anyhow::{Context, Result};
use mtbl_et::cli::output::{self, CROSS};
use mtbl_et::cli::Cli;
use mtbl_et::core::{PipelineConfig, ToolPaths};
use mtbl_et::execution::{pipeline, UvToolRunner};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Tool path overrides may come from a .env next to the binary
    dotenvy::dotenv().ok();

    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    let paths = ToolPaths::from_env();
    let config = PipelineConfig::from_cli(&cli, &paths)?;

    output::config_summary(&config);

    let runner = UvToolRunner::default();

    // The in-flight tool shares our process group, so Ctrl-C reaches it
    // through normal signal delivery; we only report and exit.
    let result = tokio::select! {
        result = pipeline::run(&config, &paths, &runner) => result,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\n\n{} Process interrupted by user\n", CROSS);
            std::process::exit(130);
        }
    };

    match result {
        Ok(()) => {
            output::banner("ALL PROCESSES COMPLETED SUCCESSFULLY");
            println!();
            Ok(())
        }
        Err(err) => {
            output::failure(&err.to_string());
            error!("{}", err);
            std::process::exit(err.exit_code());
        }
    }
}
