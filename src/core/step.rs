//! Step invocations - one external tool launch per pipeline step

use std::path::PathBuf;

/// A single external tool launch: which tool directory to run from, which
/// script command to invoke, and the flat argument list to pass along.
///
/// Constructed just before execution and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepInvocation {
    /// Directory of the uv project that owns the command
    pub tool_dir: PathBuf,

    /// The command to run (script name from the tool's pyproject.toml)
    pub command: String,

    /// Command-line arguments, in order
    pub args: Vec<String>,

    /// Human-readable description for banners and logs
    pub description: String,

    /// Treat exit code 1 as success. Some tools (like the Player Universe
    /// Transformer) return exit code 1 even on success.
    pub tolerate_exit_code_1: bool,
}

impl StepInvocation {
    /// Create an invocation with the default strict exit-code policy
    pub fn new(
        tool_dir: PathBuf,
        command: impl Into<String>,
        args: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            tool_dir,
            command: command.into(),
            args,
            description: description.into(),
            tolerate_exit_code_1: false,
        }
    }

    /// Mark this step as tolerating exit code 1
    pub fn tolerating_exit_code_1(mut self) -> Self {
        self.tolerate_exit_code_1 = true;
        self
    }

    /// One-line rendering of the command for log output
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.command.clone()
        } else {
            format!("{} {}", self.command, self.args.join(" "))
        }
    }
}
