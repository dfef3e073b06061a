//! Human-readable deploy progress

use std::io::{self, Write};
use std::sync::Mutex;

use tcboot::{DeployEvent, DeployEventSink, DeployStage};

use crate::ui::context::UiContext;
use crate::ui::views::deploy::{
    render_command, render_configuration, render_plan_note, render_script, render_stage,
};

/// Event sink that prints progress for people watching a terminal.
pub struct ConsoleEventSink {
    ui: UiContext,
    dry_run: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext, dry_run: bool) -> Self {
        Self::with_writer(ui, dry_run, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, dry_run: bool, writer: W) -> Self {
        Self {
            ui,
            dry_run,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn show_commands(&self) -> bool {
        self.dry_run || self.ui.verbose >= 1
    }

    fn show_script(&self) -> bool {
        self.ui.verbose >= 2 || (self.dry_run && self.ui.verbose >= 1)
    }

    fn write(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(text.as_bytes());
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let (color, unicode) = (self.ui.color, self.ui.unicode);

        let text = match event {
            DeployEvent::StageStarted { stage } => match stage {
                DeployStage::Upload => render_stage(1, "Uploading to remote temp...", color),
                DeployStage::RemoteExecute => {
                    render_stage(2, "Setting up Boot directory and copying files...", color)
                }
                DeployStage::CheckTools | DeployStage::ValidateSource => String::new(),
            },
            DeployEvent::Resolved {
                source,
                remote_host,
                username,
                restart,
                destination,
            } => render_configuration(
                &source,
                &remote_host,
                &username,
                restart,
                &destination,
                color,
                unicode,
            ),
            DeployEvent::ScriptComposed { steps } if self.show_script() => {
                render_script(&steps, color)
            }
            DeployEvent::Command { line, .. } if self.show_commands() => {
                render_command(&line, color, unicode)
            }
            DeployEvent::Planned => render_plan_note(color, unicode),
            _ => String::new(),
        };

        self.write(&text);
    }
}
