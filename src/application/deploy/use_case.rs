//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Check that `ssh` and `scp` can be run
//! 2. Validate the local boot folder
//! 3. Compose the remote script
//! 4. Upload with `scp -r`
//! 5. Run the script with `ssh -t`
//!
//! Strictly sequential. The first failure ends the run; nothing is
//! retried or rolled back.

use crate::config::Config;
use crate::domain::entities::DeployRequest;
use crate::domain::ports::{
    CommandRunner, DeployEvent, DeployEventSink, DeployStage, Invocation, ProcessOutput,
    StdioMode,
};
use crate::domain::services::{RemoteScript, ScriptParams};
use crate::error::{TcbootError, TcbootResult};
use crate::infrastructure::{check_tools, resolve_source, ScpUpload, SshSession};

use super::options::{DeployOptions, DeployOutcome};

/// Deploy use case - orchestrates the deployment flow
///
/// Parameterized by the command runner so tests never spawn `ssh`.
pub struct DeployUseCase<'a, R: CommandRunner> {
    runner: R,
    config: &'a Config,
}

impl<'a, R: CommandRunner> DeployUseCase<'a, R> {
    pub fn new(runner: R, config: &'a Config) -> Self {
        Self { runner, config }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Execute the deploy use case
    pub fn execute(
        &self,
        request: &DeployRequest,
        options: &DeployOptions,
        sink: &dyn DeployEventSink,
    ) -> TcbootResult<DeployOutcome> {
        let tools = &self.config.tools;
        let remote = &self.config.remote;

        sink.on_event(DeployEvent::StageStarted {
            stage: DeployStage::CheckTools,
        });
        check_tools(&self.runner, tools)?;

        sink.on_event(DeployEvent::StageStarted {
            stage: DeployStage::ValidateSource,
        });
        let source = resolve_source(&request.source_path)?;

        sink.on_event(DeployEvent::Resolved {
            source: source.path().to_path_buf(),
            remote_host: request.remote_host.clone(),
            username: request.username.clone(),
            restart: request.restart,
            destination: remote.destination.clone(),
        });

        let script = RemoteScript::compose(&ScriptParams {
            folder_name: source.folder_name(),
            username: &request.username,
            restart: request.restart,
            remote,
        });
        sink.on_event(DeployEvent::ScriptComposed {
            steps: script.steps().iter().map(|s| s.command.clone()).collect(),
        });

        let upload = ScpUpload::new(&tools.scp).invocation(source.path(), request);
        let session = SshSession::new(&tools.ssh).invocation(request, &script);

        let outcome = DeployOutcome {
            source: source.path().to_path_buf(),
            step_count: script.len(),
            restarted: request.restart && !options.dry_run,
            dry_run: options.dry_run,
        };

        if options.dry_run {
            emit_command(sink, &upload);
            emit_command(sink, &session);
            sink.on_event(DeployEvent::Planned);
            return Ok(outcome);
        }

        let stdio = if options.json {
            StdioMode::InheritedStdoutToStderr
        } else {
            StdioMode::Inherited
        };

        sink.on_event(DeployEvent::StageStarted {
            stage: DeployStage::Upload,
        });
        emit_command(sink, &upload);
        let copied = self.spawn(&upload, stdio)?;
        if !copied.success() {
            return Err(TcbootError::CopyFailed { code: copied.code });
        }

        sink.on_event(DeployEvent::StageStarted {
            stage: DeployStage::RemoteExecute,
        });
        emit_command(sink, &session);
        let executed = self.spawn(&session, stdio)?;
        if !executed.success() {
            return Err(TcbootError::RemoteFailed {
                code: executed.code,
            });
        }

        sink.on_event(DeployEvent::Completed {
            restart: request.restart,
        });
        Ok(outcome)
    }

    fn spawn(&self, invocation: &Invocation, stdio: StdioMode) -> TcbootResult<ProcessOutput> {
        self.runner
            .run(invocation, stdio)
            .map_err(|source| TcbootError::Spawn {
                program: invocation.program.clone(),
                source,
            })
    }
}

fn emit_command(sink: &dyn DeployEventSink, invocation: &Invocation) {
    sink.on_event(DeployEvent::Command {
        program: invocation.program.clone(),
        line: invocation.to_string(),
    });
}
