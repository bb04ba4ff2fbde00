//! Test utility functions for mtbl-et

use async_trait::async_trait;
use mtbl_et::core::{PipelineConfig, StepInvocation, ToolPaths};
use mtbl_et::execution::{StepError, StepOutcome, ToolRunner};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Tool runner that records invocations instead of spawning anything.
///
/// Exit codes can be scripted per command name; unscripted commands exit 0.
/// The exit-code interpretation mirrors the real runner's policy.
pub struct RecordingRunner {
    invocations: Mutex<Vec<StepInvocation>>,
    exit_codes: HashMap<String, i32>,
    launcher_missing: bool,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            invocations: Mutex::new(Vec::new()),
            exit_codes: HashMap::new(),
            launcher_missing: false,
        }
    }

    /// Script a nonzero exit code for a command
    pub fn with_exit_code(mut self, command: &str, code: i32) -> Self {
        self.exit_codes.insert(command.to_string(), code);
        self
    }

    /// Simulate uv missing from PATH
    pub fn with_missing_launcher(mut self) -> Self {
        self.launcher_missing = true;
        self
    }

    /// Everything that was launched, in order
    pub fn invocations(&self) -> Vec<StepInvocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// Command names that were launched, in order
    pub fn commands(&self) -> Vec<String> {
        self.invocations()
            .into_iter()
            .map(|invocation| invocation.command)
            .collect()
    }
}

#[async_trait]
impl ToolRunner for RecordingRunner {
    async fn run(&self, invocation: &StepInvocation) -> Result<StepOutcome, StepError> {
        if self.launcher_missing {
            return Err(StepError::LauncherNotFound);
        }

        self.invocations.lock().unwrap().push(invocation.clone());

        let code = self
            .exit_codes
            .get(&invocation.command)
            .copied()
            .unwrap_or(0);
        match code {
            0 => Ok(StepOutcome::Success),
            1 if invocation.tolerate_exit_code_1 => Ok(StepOutcome::ToleratedFailure),
            code => Err(StepError::StepFailed {
                description: invocation.description.clone(),
                code,
            }),
        }
    }
}

/// Config matching the spec scenario: 2025, forced, /out/extract
pub fn scenario_config() -> PipelineConfig {
    PipelineConfig {
        year: 2025,
        force_full_extraction: true,
        extract_output_dir: PathBuf::from("/out/extract"),
        transform_output_dir: PathBuf::from("/out/transform"),
    }
}

pub fn scenario_paths() -> ToolPaths {
    ToolPaths::new(PathBuf::from("/tools"), PathBuf::from("/resources"))
}
