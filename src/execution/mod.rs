//! Pipeline execution

pub mod pipeline;
pub mod runner;

pub use runner::{StepError, StepOutcome, ToolRunner, UvToolRunner};
