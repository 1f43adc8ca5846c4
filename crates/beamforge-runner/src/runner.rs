//! Supported pipeline runners

use std::fmt;
use std::str::FromStr;

use crate::error::RunnerError;

/// The closed set of runners a pipeline can be handed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runner {
    /// Local in-process execution via the Beam YAML main module
    Direct,

    /// Managed execution on Google Cloud Dataflow
    Dataflow,
}

impl Runner {
    /// The runner name as the Beam tooling spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Runner::Direct => "DirectRunner",
            Runner::Dataflow => "DataflowRunner",
        }
    }

    /// All supported runners, in display order
    pub fn all() -> [Runner; 2] {
        [Runner::Direct, Runner::Dataflow]
    }
}

impl fmt::Display for Runner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Runner {
    type Err = RunnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DirectRunner" => Ok(Runner::Direct),
            "DataflowRunner" => Ok(Runner::Dataflow),
            _ => Err(RunnerError::UnknownRunner {
                name: s.to_string(),
            }),
        }
    }
}
