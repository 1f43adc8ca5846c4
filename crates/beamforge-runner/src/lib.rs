//! BeamForge Runner - external pipeline execution
//!
//! Hands a finished pipeline YAML document to an external runner process
//! (the Beam YAML main module for local runs, `gcloud` for managed
//! Dataflow jobs), captures its combined output, and derives a
//! job-tracking URL for Dataflow runs. Every launch is bounded by a
//! configurable timeout; a timed-out child is killed rather than awaited
//! forever.

pub mod error;
pub mod launcher;
pub mod runner;

// Re-export main types
pub use error::{Result, RunnerError};
pub use launcher::{LaunchReport, LauncherConfig, PipelineLauncher};
pub use runner::Runner;
