//! External tool execution through the uv launcher

use crate::core::StepInvocation;
use async_trait::async_trait;
use std::io;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Errors from launching or awaiting an external tool
#[derive(Debug, Error)]
pub enum StepError {
    /// The uv launcher itself is missing from PATH
    #[error("UV not found. Please install UV first: https://docs.astral.sh/uv/")]
    LauncherNotFound,

    /// A tool exited with a non-tolerated nonzero exit code
    #[error("{description} failed with exit code {code}")]
    StepFailed { description: String, code: i32 },

    /// The launcher was found but the process could not be started or awaited
    #[error("failed to launch {description}: {source}")]
    Spawn {
        description: String,
        #[source]
        source: io::Error,
    },
}

impl StepError {
    /// Process exit code the orchestrator forwards for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            StepError::StepFailed { code, .. } => *code,
            StepError::LauncherNotFound | StepError::Spawn { .. } => 1,
        }
    }
}

/// How a completed step finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Exit code 0
    Success,

    /// Exit code 1 on a step marked tolerant; treated as success
    ToleratedFailure,
}

/// Seam for launching external tools, so the pipeline is testable without
/// uv or the tool projects installed.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Launch the invocation and await it to completion
    async fn run(&self, invocation: &StepInvocation) -> Result<StepOutcome, StepError>;
}

/// Runs tools with `uv run --directory <dir> <command> <args...>`,
/// inheriting stdout/stderr so tool output lands in the operator's terminal.
#[derive(Debug, Clone)]
pub struct UvToolRunner {
    /// Path to the uv executable
    uv_path: String,
}

impl UvToolRunner {
    pub fn new(uv_path: String) -> Self {
        Self { uv_path }
    }
}

impl Default for UvToolRunner {
    fn default() -> Self {
        Self::new("uv".to_string())
    }
}

#[async_trait]
impl ToolRunner for UvToolRunner {
    async fn run(&self, invocation: &StepInvocation) -> Result<StepOutcome, StepError> {
        debug!(
            "Spawning {} run --directory {} {}",
            self.uv_path,
            invocation.tool_dir.display(),
            invocation.command_line()
        );

        let status = Command::new(&self.uv_path)
            .arg("run")
            .arg("--directory")
            .arg(&invocation.tool_dir)
            .arg(&invocation.command)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => StepError::LauncherNotFound,
                _ => StepError::Spawn {
                    description: invocation.description.clone(),
                    source: e,
                },
            })?;

        interpret_status(invocation, status.code())
    }
}

/// Map a raw exit code to the step outcome, honoring the per-step
/// exit-code-1 tolerance. `None` means the process was killed by a signal.
fn interpret_status(
    invocation: &StepInvocation,
    code: Option<i32>,
) -> Result<StepOutcome, StepError> {
    match code {
        Some(0) => {
            info!("{} exited cleanly", invocation.description);
            Ok(StepOutcome::Success)
        }
        Some(1) if invocation.tolerate_exit_code_1 => {
            warn!(
                "{} returned exit code 1; treating as success (known tool defect)",
                invocation.description
            );
            Ok(StepOutcome::ToleratedFailure)
        }
        Some(code) => Err(StepError::StepFailed {
            description: invocation.description.clone(),
            code,
        }),
        None => Err(StepError::StepFailed {
            description: invocation.description.clone(),
            code: 1,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn strict_step() -> StepInvocation {
        StepInvocation::new(PathBuf::from("/tools/extractor"), "extract", vec![], "Extractor")
    }

    fn tolerant_step() -> StepInvocation {
        StepInvocation::new(PathBuf::from("/tools/trx"), "universe_trx", vec![], "Transformer")
            .tolerating_exit_code_1()
    }

    #[test]
    fn test_exit_zero_is_success() {
        let outcome = interpret_status(&strict_step(), Some(0)).unwrap();
        assert_eq!(outcome, StepOutcome::Success);
    }

    #[test]
    fn test_exit_one_fails_strict_step() {
        let err = interpret_status(&strict_step(), Some(1)).unwrap_err();
        match err {
            StepError::StepFailed { code, description } => {
                assert_eq!(code, 1);
                assert_eq!(description, "Extractor");
            }
            other => panic!("expected StepFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_exit_one_tolerated() {
        let outcome = interpret_status(&tolerant_step(), Some(1)).unwrap();
        assert_eq!(outcome, StepOutcome::ToleratedFailure);
    }

    #[test]
    fn test_other_codes_fail_tolerant_step_too() {
        let err = interpret_status(&tolerant_step(), Some(2)).unwrap_err();
        assert!(matches!(err, StepError::StepFailed { code: 2, .. }));
    }

    #[test]
    fn test_signal_death_maps_to_exit_one() {
        let err = interpret_status(&strict_step(), None).unwrap_err();
        assert!(matches!(err, StepError::StepFailed { code: 1, .. }));
    }

    #[test]
    fn test_exit_code_forwarding() {
        let failed = StepError::StepFailed {
            description: "Extractor".to_string(),
            code: 7,
        };
        assert_eq!(failed.exit_code(), 7);
        assert_eq!(StepError::LauncherNotFound.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_launcher_not_found() {
        let runner = UvToolRunner::new("definitely-not-a-real-uv-binary".to_string());
        let result = runner.run(&strict_step()).await;
        assert!(matches!(result, Err(StepError::LauncherNotFound)));
    }
}
