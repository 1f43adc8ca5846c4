//! Pipeline launcher implementation
//!
//! Writes the pipeline YAML to a scratch directory, assembles the runner
//! command line, and runs it to completion under a timeout.

use std::process::Stdio;
use std::time::Duration;

use chrono::Local;
use rand::Rng;
use tokio::process::Command;

use crate::error::{Result, RunnerError};
use crate::runner::Runner;

/// Launcher configuration
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Interpreter used for local runs of the Beam YAML main module
    pub python_bin: String,

    /// Executable used for managed Dataflow runs
    pub gcloud_bin: String,

    /// Region injected for Dataflow runs when the options carry none
    pub default_region: String,

    /// Upper bound on a single run; the child is killed on expiry
    pub timeout: Duration,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            python_bin: "python".to_string(),
            gcloud_bin: "gcloud".to_string(),
            default_region: "us-central1".to_string(),
            timeout: Duration::from_secs(600),
        }
    }
}

impl LauncherConfig {
    /// Create a configuration with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the run timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the default Dataflow region
    pub fn with_default_region(mut self, region: impl Into<String>) -> Self {
        self.default_region = region.into();
        self
    }
}

/// What a completed (or failed-to-complete) run produced
#[derive(Debug, Clone)]
pub struct LaunchReport {
    /// The full command line that was executed
    pub command_line: String,

    /// Combined stdout and stderr of the runner process
    pub output: String,

    /// Dataflow job-tracking URL, when a job id was found in the output
    pub job_url: Option<String>,
}

/// Runs pipeline YAML documents through an external runner process
#[derive(Debug, Clone, Default)]
pub struct PipelineLauncher {
    config: LauncherConfig,
}

impl PipelineLauncher {
    /// Create a launcher with the given configuration
    pub fn new(config: LauncherConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Run a pipeline document to completion
    ///
    /// `extra_options` is a shell-style string of flag tokens appended to
    /// the command verbatim. A nonzero exit is a normal report (its output
    /// tells the story); only a failure to start or a timeout is an error.
    pub async fn launch(
        &self,
        runner: Runner,
        extra_options: &str,
        yaml_content: &str,
    ) -> Result<LaunchReport> {
        let mut options: Vec<String> = extra_options.split_whitespace().map(String::from).collect();

        let mut region = region_option(&options);
        if runner == Runner::Dataflow && region.is_none() {
            region = Some(self.config.default_region.clone());
            options.push("--region".to_string());
            options.push(self.config.default_region.clone());
        }
        let dry_run = is_dry_run(&options);

        let scratch = tempfile::tempdir()?;
        let yaml_path = scratch.path().join("pipeline.yaml");
        tokio::fs::write(&yaml_path, yaml_content).await?;

        let mut argv: Vec<String> = if runner == Runner::Dataflow && !dry_run {
            vec![
                self.config.gcloud_bin.clone(),
                "dataflow".to_string(),
                "yaml".to_string(),
                "run".to_string(),
                dataflow_job_name(),
                format!("--yaml-pipeline-file={}", yaml_path.display()),
            ]
        } else {
            vec![
                self.config.python_bin.clone(),
                "-m".to_string(),
                "apache_beam.yaml.main".to_string(),
                format!("--yaml_pipeline_file={}", yaml_path.display()),
                format!("--runner={}", runner.as_str()),
            ]
        };
        argv.extend(options);
        let command_line = argv.join(" ");

        tracing::info!(command = %command_line, "launching pipeline");

        let mut command = Command::new(&argv[0]);
        command
            .args(&argv[1..])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.config.timeout, command.output()).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(command = %command_line, "pipeline run timed out");
                return Err(RunnerError::Timeout {
                    seconds: self.config.timeout.as_secs(),
                });
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let combined = format!("{}\n{}", stdout, stderr).trim().to_string();

        let job_url = if runner == Runner::Dataflow && !dry_run {
            let region = region.as_deref().unwrap_or(&self.config.default_region);
            extract_job_url(&combined, region)
        } else {
            None
        };

        Ok(LaunchReport {
            command_line,
            output: combined,
            job_url,
        })
    }
}

/// Find the value following a `--region` token
fn region_option(tokens: &[String]) -> Option<String> {
    tokens
        .windows(2)
        .find(|pair| pair[0] == "--region")
        .map(|pair| pair[1].clone())
}

/// True when the options request a dry run (`--dry_run True`)
fn is_dry_run(tokens: &[String]) -> bool {
    tokens
        .windows(2)
        .any(|pair| pair[0] == "--dry_run" && pair[1] == "True")
}

/// A fresh Dataflow job name: `dataflow-job-<timestamp>-<random>`
fn dataflow_job_name() -> String {
    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    let suffix: u32 = rand::thread_rng().gen_range(1000..=9999);
    format!("dataflow-job-{}-{}", timestamp, suffix)
}

/// Scan runner output for a job id and build the job-tracking URL
fn extract_job_url(output: &str, region: &str) -> Option<String> {
    let idx = output.find("id: ")?;
    let job_id = output[idx + 4..].split_whitespace().next()?;
    Some(format!(
        "https://pantheon.corp.google.com/dataflow/jobs/{}/{}",
        region, job_id
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_region_option_found() {
        assert_eq!(
            region_option(&tokens("--streaming --region europe-west1")),
            Some("europe-west1".to_string())
        );
    }

    #[test]
    fn test_region_option_absent() {
        assert_eq!(region_option(&tokens("--streaming")), None);
        assert_eq!(region_option(&tokens("--region")), None);
    }

    #[test]
    fn test_dry_run_detection() {
        assert!(is_dry_run(&tokens("--dry_run True")));
        assert!(!is_dry_run(&tokens("--dry_run False")));
        assert!(!is_dry_run(&tokens("--dry_run")));
    }

    #[test]
    fn test_job_name_shape() {
        let name = dataflow_job_name();
        assert!(name.starts_with("dataflow-job-"));
        // dataflow-job-YYYYMMDD-HHMMSS-NNNN
        assert_eq!(name.split('-').count(), 5);
    }

    #[test]
    fn test_job_url_extraction() {
        let output = "Job submitted.\nid: 2024-01-15_08_00_00-123456\nstate: Running";
        let url = extract_job_url(output, "us-central1").unwrap();
        assert_eq!(
            url,
            "https://pantheon.corp.google.com/dataflow/jobs/us-central1/2024-01-15_08_00_00-123456"
        );
    }

    #[test]
    fn test_job_url_absent_without_id() {
        assert_eq!(extract_job_url("no job here", "us-central1"), None);
    }

    #[tokio::test]
    async fn test_spawn_failure_is_an_io_error() {
        let config = LauncherConfig {
            python_bin: "/nonexistent/python-interpreter".to_string(),
            ..LauncherConfig::default()
        };
        let launcher = PipelineLauncher::new(config);
        let err = launcher
            .launch(Runner::Direct, "", "pipeline:\n  transforms: []\n")
            .await
            .unwrap_err();
        assert!(matches!(err, RunnerError::Io(_)));
    }

    #[tokio::test]
    async fn test_direct_command_line_shape() {
        // `echo` stands in for the interpreter so the command completes
        // immediately and echoes its own arguments back.
        let config = LauncherConfig {
            python_bin: "echo".to_string(),
            ..LauncherConfig::default()
        };
        let launcher = PipelineLauncher::new(config);
        let report = launcher
            .launch(Runner::Direct, "--streaming", "pipeline:\n  transforms: []\n")
            .await
            .unwrap();

        assert!(report.command_line.contains("apache_beam.yaml.main"));
        assert!(report.command_line.contains("--runner=DirectRunner"));
        assert!(report.command_line.ends_with("--streaming"));
        assert!(report.output.contains("--runner=DirectRunner"));
        assert!(report.job_url.is_none());
    }

    #[tokio::test]
    async fn test_timeout_kills_a_hung_runner() {
        use std::os::unix::fs::PermissionsExt;

        // A stand-in interpreter that ignores its arguments and hangs
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("hung-runner.sh");
        std::fs::write(&script, "#!/bin/sh\nsleep 5\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let config = LauncherConfig {
            python_bin: script.display().to_string(),
            timeout: Duration::from_millis(100),
            ..LauncherConfig::default()
        };
        let launcher = PipelineLauncher::new(config);
        let err = launcher
            .launch(Runner::Direct, "", "pipeline:\n  transforms: []\n")
            .await
            .unwrap_err();
        assert!(matches!(err, RunnerError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_direct_runs_never_get_a_region_injected() {
        let config = LauncherConfig {
            python_bin: "echo".to_string(),
            ..LauncherConfig::default()
        };
        let launcher = PipelineLauncher::new(config);
        let report = launcher
            .launch(Runner::Direct, "", "pipeline:\n  transforms: []\n")
            .await
            .unwrap();
        assert!(!report.command_line.contains("--region"));
    }
}
