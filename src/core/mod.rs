//! Core domain models for the orchestrator
//!
//! This module defines the run configuration, the environment-resolved tool
//! paths, and the per-step invocation description.

pub mod config;
pub mod step;

pub use config::*;
pub use step::*;
