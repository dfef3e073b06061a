//! Deploy Event Port
//!
//! Provides an observable interface for the deploy pipeline.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

/// Pipeline stage, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStage {
    CheckTools,
    ValidateSource,
    Upload,
    RemoteExecute,
}

impl DeployStage {
    /// Stable identifier used in JSON output
    pub fn id(&self) -> &'static str {
        match self {
            DeployStage::CheckTools => "check_tools",
            DeployStage::ValidateSource => "validate_source",
            DeployStage::Upload => "upload",
            DeployStage::RemoteExecute => "remote_execute",
        }
    }
}

/// Event emitted during a deploy
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// A stage is about to run
    StageStarted { stage: DeployStage },

    /// Source validated; the effective configuration is known
    Resolved {
        source: PathBuf,
        remote_host: String,
        username: String,
        restart: bool,
        destination: String,
    },

    /// Remote script assembled
    ScriptComposed { steps: Vec<String> },

    /// An external program is about to be run
    Command { program: String, line: String },

    /// Dry run finished without running the transfer
    Planned,

    /// Deploy completed
    Completed { restart: bool },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
