//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::StageStarted { stage } => {
                serde_json::json!({
                    "event": "stage",
                    "command": "deploy",
                    "stage": stage.id(),
                })
            }

            DeployEvent::Resolved {
                source,
                remote_host,
                username,
                restart,
                destination,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "deploy",
                    "source": source.display().to_string(),
                    "remote_host": remote_host,
                    "username": username,
                    "restart": restart,
                    "destination": destination,
                })
            }

            DeployEvent::ScriptComposed { steps } => {
                serde_json::json!({
                    "event": "script",
                    "command": "deploy",
                    "step_count": steps.len(),
                    "steps": steps,
                })
            }

            DeployEvent::Command { program, line } => {
                serde_json::json!({
                    "event": "exec",
                    "command": "deploy",
                    "program": program,
                    "line": line,
                })
            }

            DeployEvent::Planned => {
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": "planned",
                    "dry_run": true,
                })
            }

            DeployEvent::Completed { restart } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": "success",
                    "restart": restart,
                })
            }
        };

        self.write_event(json);
    }
}
