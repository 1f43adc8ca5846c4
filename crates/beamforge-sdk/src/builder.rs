//! Builder pattern for EditorSession

use std::path::PathBuf;
use std::sync::Arc;

use beamforge_catalog::TransformCatalog;
use beamforge_runner::{LauncherConfig, PipelineLauncher};

use crate::config::SessionConfig;
use crate::editor_session::EditorSession;
use crate::error::Result;

/// Builder for [`EditorSession`]
///
/// # Example
///
/// ```rust,ignore
/// use beamforge_sdk::EditorSessionBuilder;
///
/// // Empty session with the bundled catalog
/// let session = EditorSessionBuilder::new().build().await?;
///
/// // Session preloaded from a pipeline file
/// let session = EditorSessionBuilder::new()
///     .with_pipeline_file("pipeline.yaml")
///     .build()
///     .await?;
/// ```
pub struct EditorSessionBuilder {
    config: SessionConfig,
    catalog: Option<Arc<TransformCatalog>>,
}

impl EditorSessionBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: SessionConfig::new(),
            catalog: None,
        }
    }

    /// Use a custom transform catalog instead of the bundled one
    pub fn with_catalog(mut self, catalog: TransformCatalog) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Share an already-constructed catalog
    pub fn with_shared_catalog(mut self, catalog: Arc<TransformCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Configure the pipeline launcher
    pub fn with_launcher_config(mut self, launcher: LauncherConfig) -> Self {
        self.config.launcher = launcher;
        self
    }

    /// Load this pipeline content when the session is built
    pub fn with_pipeline_yaml(mut self, yaml: impl Into<String>) -> Self {
        self.config.initial_yaml = Some(yaml.into());
        self
    }

    /// Read and load this pipeline file when the session is built
    pub fn with_pipeline_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.pipeline_file = Some(path.into());
        self
    }

    /// Build the session
    ///
    /// Inline content wins over a pipeline file when both are set. A
    /// preloaded document that fails to parse fails the build; start with
    /// an empty session and call
    /// [`load_pipeline`](EditorSession::load_pipeline) to handle that
    /// interactively instead.
    pub async fn build(self) -> Result<EditorSession> {
        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(TransformCatalog::builtin()));
        let launcher = PipelineLauncher::new(self.config.launcher);
        let mut session = EditorSession::new(catalog, launcher)?;

        let initial_yaml = match (self.config.initial_yaml, self.config.pipeline_file) {
            (Some(yaml), _) => Some(yaml),
            (None, Some(path)) => Some(tokio::fs::read_to_string(&path).await?),
            (None, None) => None,
        };
        if let Some(yaml) = initial_yaml {
            session.load_pipeline(&yaml)?;
        }
        Ok(session)
    }
}

impl Default for EditorSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
