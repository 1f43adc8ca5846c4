//! Configuration types for the editing session

use std::path::PathBuf;

use beamforge_runner::LauncherConfig;

/// Session configuration
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Pipeline YAML to load when the session is built
    pub initial_yaml: Option<String>,

    /// Pipeline file to read and load when the session is built;
    /// takes effect only when `initial_yaml` is unset
    pub pipeline_file: Option<PathBuf>,

    /// Launcher settings for pipeline runs
    pub launcher: LauncherConfig,
}

impl SessionConfig {
    /// Create a configuration with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial pipeline content
    pub fn with_initial_yaml(mut self, yaml: impl Into<String>) -> Self {
        self.initial_yaml = Some(yaml.into());
        self
    }

    /// Set the initial pipeline file
    pub fn with_pipeline_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.pipeline_file = Some(path.into());
        self
    }

    /// Set the launcher configuration
    pub fn with_launcher(mut self, launcher: LauncherConfig) -> Self {
        self.launcher = launcher;
        self
    }
}
