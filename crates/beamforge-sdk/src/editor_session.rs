//! EditorSession - the main API for editing a pipeline
//!
//! One session holds exactly one graph. Every successful mutation
//! regenerates the session's YAML document, so the document is always the
//! current durable form of the graph; there is no separate save step.
//! Failed operations leave both the graph and the document untouched and
//! surface a log entry alongside the returned error.

use std::collections::HashSet;
use std::sync::Arc;

use beamforge_catalog::TransformCatalog;
use beamforge_core::{CoreError, Graph};
use beamforge_parser::{PipelineParser, PipelineSerializer};
use beamforge_runner::{LaunchReport, PipelineLauncher, Runner};
use serde_yaml::{Mapping, Value as YamlValue};

use crate::error::{Result, SdkError};
use crate::log::SessionLog;

/// A single pipeline editing session
pub struct EditorSession {
    /// The graph under edit
    graph: Graph,

    /// The YAML document regenerated after the last successful mutation
    yaml: String,

    /// Known transform types for pickers and config scaffolding
    catalog: Arc<TransformCatalog>,

    /// External runner invocation
    launcher: PipelineLauncher,

    /// Session history, newest entries last
    log: SessionLog,
}

impl EditorSession {
    /// Create an empty session
    pub fn new(catalog: Arc<TransformCatalog>, launcher: PipelineLauncher) -> Result<Self> {
        let graph = Graph::new();
        let yaml = PipelineSerializer::serialize(&graph)?;
        Ok(Self {
            graph,
            yaml,
            catalog,
            launcher,
            log: SessionLog::new(),
        })
    }

    // ========== Accessors ==========

    /// The graph under edit
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The current YAML document
    pub fn yaml(&self) -> &str {
        &self.yaml
    }

    /// The session log
    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// The session log, mutable (for clearing)
    pub fn log_mut(&mut self) -> &mut SessionLog {
        &mut self.log
    }

    /// The transform catalog in use
    pub fn catalog(&self) -> &TransformCatalog {
        &self.catalog
    }

    /// Known transform names for a type picker, `UNKNOWN` first
    pub fn type_options(&self) -> Vec<&str> {
        self.catalog.transform_names().collect()
    }

    /// Default configuration scaffold for a transform type
    pub fn scaffold_config(&self, type_name: &str) -> Mapping {
        self.catalog.default_config(type_name)
    }

    // ========== Pipeline loading ==========

    /// Replace the whole graph with a freshly parsed document
    ///
    /// This discards any prior edits. A parse failure leaves an *empty*
    /// session (never a partial one) and returns the error after logging
    /// it.
    pub fn load_pipeline(&mut self, yaml_text: &str) -> Result<()> {
        match PipelineParser::parse(yaml_text) {
            Ok(graph) => {
                self.graph = graph;
                self.refresh_yaml()?;
                self.log.append(format!(
                    "Loaded pipeline with {} transform(s) and {} connection(s)",
                    self.graph.node_count(),
                    self.graph.edge_count()
                ));
                Ok(())
            }
            Err(e) => {
                self.graph = Graph::new();
                self.refresh_yaml()?;
                self.log.append(format!("Failed to parse pipeline: {}", e));
                Err(e.into())
            }
        }
    }

    // ========== Editing operations ==========

    /// Add a fresh `UNKNOWN` node, returning its id
    pub fn add_node(&mut self) -> Result<String> {
        let id = self.graph.add_node().id.clone();
        self.refresh_yaml()?;
        self.log.append(format!("Added node '{}'", id));
        Ok(id)
    }

    /// Connect two nodes
    ///
    /// Returns `Ok(false)` when an edge between the two already exists in
    /// either direction (a notice, not a failure). Missing nodes and
    /// self-loops are hard errors.
    pub fn add_edge(&mut self, source: &str, target: &str) -> Result<bool> {
        match self.graph.add_edge(source, target) {
            Ok(()) => {
                self.refresh_yaml()?;
                self.log
                    .append(format!("Connected '{}' to '{}'", source, target));
                Ok(true)
            }
            Err(e @ CoreError::DuplicateEdge { .. }) => {
                self.log.append(e.to_string());
                Ok(false)
            }
            Err(e) => {
                self.log.append(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Delete the listed nodes and edges, cascading to touching edges
    pub fn delete_selected(
        &mut self,
        node_ids: &HashSet<String>,
        edge_keys: &[(String, String)],
    ) -> Result<()> {
        let (nodes_before, edges_before) = (self.graph.node_count(), self.graph.edge_count());
        self.graph.delete_selected(node_ids, edge_keys);
        self.refresh_yaml()?;
        self.log.append(format!(
            "Deleted {} node(s) and {} edge(s)",
            nodes_before - self.graph.node_count(),
            edges_before - self.graph.edge_count()
        ));
        Ok(())
    }

    /// Rename a node, rewriting the edges that reference it
    pub fn rename_node(&mut self, old_id: &str, new_id: &str) -> Result<()> {
        if old_id == new_id {
            return Ok(());
        }
        match self.graph.rename_node(old_id, new_id) {
            Ok(()) => {
                self.refresh_yaml()?;
                self.log
                    .append(format!("Renamed node from '{}' to '{}'", old_id, new_id));
                Ok(())
            }
            Err(e) => {
                self.log.append(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Change a node's transform type; a genuine change resets its config
    pub fn set_node_type(&mut self, id: &str, new_type: &str) -> Result<()> {
        match self.graph.set_node_type(id, new_type) {
            Ok(true) => {
                self.refresh_yaml()?;
                self.log
                    .append(format!("Changed type of node '{}' to '{}'", id, new_type));
                Ok(())
            }
            Ok(false) => Ok(()),
            Err(e) => {
                self.log.append(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Replace a node's configuration with an already-parsed mapping
    pub fn set_node_config(&mut self, id: &str, config: Mapping) -> Result<()> {
        match self.graph.set_node_config(id, config) {
            Ok(()) => {
                self.refresh_yaml()?;
                self.log.append(format!("Updated config of node '{}'", id));
                Ok(())
            }
            Err(e) => {
                self.log.append(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Replace a node's configuration from user-supplied text
    ///
    /// The text must parse as a YAML mapping (JSON-style flow syntax
    /// included); blank text means the empty mapping. On a parse failure
    /// the node keeps its prior configuration.
    pub fn set_node_config_text(&mut self, id: &str, config_text: &str) -> Result<()> {
        let config = match parse_config_text(config_text) {
            Ok(config) => config,
            Err(e) => {
                self.log
                    .append(format!("Invalid configuration for node '{}': {}", id, e));
                return Err(e);
            }
        };
        self.set_node_config(id, config)
    }

    // ========== Running ==========

    /// Hand the current document to an external runner
    ///
    /// The command line, the captured output, and (for Dataflow) the
    /// job-tracking URL all land in the session log. Launcher failures are
    /// logged and returned; they never tear down the session.
    pub async fn run_pipeline(
        &mut self,
        runner: Runner,
        extra_options: &str,
    ) -> Result<LaunchReport> {
        match self.launcher.launch(runner, extra_options, &self.yaml).await {
            Ok(report) => {
                self.log
                    .append(format!("Ran pipeline with command: {}", report.command_line));
                self.log.append(format!("Output:\n{}", report.output));
                if let Some(url) = &report.job_url {
                    self.log.append(format!("Dataflow job URL: {}", url));
                }
                Ok(report)
            }
            Err(e) => {
                self.log.append(format!("Error running pipeline: {}", e));
                Err(e.into())
            }
        }
    }

    /// Regenerate the YAML document from the current graph
    fn refresh_yaml(&mut self) -> Result<()> {
        self.yaml = PipelineSerializer::serialize(&self.graph)?;
        Ok(())
    }
}

/// Parse user-supplied configuration text into a mapping
fn parse_config_text(config_text: &str) -> Result<Mapping> {
    if config_text.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<YamlValue>(config_text) {
        Ok(YamlValue::Mapping(config)) => Ok(config),
        Ok(YamlValue::Null) => Ok(Mapping::new()),
        Ok(_) => Err(SdkError::ConfigParse(
            "configuration must be a mapping".to_string(),
        )),
        Err(e) => Err(SdkError::ConfigParse(e.to_string())),
    }
}
