//! mtbl-et - orchestrator for the MTBL extract-transform pipeline
//!
//! Sequences the ESPN, Fangraphs, and Savant extractors followed by the
//! Player Universe Transformer, each launched as a uv subprocess, in a
//! fixed order with first-failure propagation.

pub mod cli;
pub mod core;
pub mod execution;

// Re-export commonly used types
pub use crate::core::{PipelineConfig, StepInvocation, ToolPaths};
pub use crate::execution::{StepError, StepOutcome, ToolRunner, UvToolRunner};
