//! Deploy Options
//!
//! Run-time switches for the deploy use case.

use std::path::PathBuf;

/// Options for the deploy use case
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeployOptions {
    /// Validate and compose, but run neither scp nor ssh
    pub dry_run: bool,
    /// Keep our stdout free of child output (NDJSON mode)
    pub json: bool,
}

impl DeployOptions {
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// What a finished deploy did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    /// Canonical local path that was (or would be) uploaded
    pub source: PathBuf,
    /// Number of steps in the remote script
    pub step_count: usize,
    pub restarted: bool,
    /// Nothing was transferred
    pub dry_run: bool,
}
