//! SSH Remote Execution
//!
//! Runs the composed script on the device in one `ssh -t` session. The
//! pseudo-terminal is required because `doas` may ask for a password.

use crate::domain::entities::DeployRequest;
use crate::domain::ports::{CommandRunner, Invocation, StdioMode};
use crate::domain::services::RemoteScript;

/// `ssh` wrapper
pub struct SshSession<'a> {
    program: &'a str,
}

impl<'a> SshSession<'a> {
    pub fn new(program: &'a str) -> Self {
        Self { program }
    }

    /// Check if ssh is installed and runnable.
    ///
    /// `ssh -V` exits 0 on most builds; some report 255.
    pub fn is_available(&self, runner: &dyn CommandRunner) -> bool {
        let probe = Invocation::new(self.program).arg("-V");
        matches!(
            runner.run(&probe, StdioMode::Captured).map(|o| o.code),
            Ok(Some(0)) | Ok(Some(255))
        )
    }

    /// `ssh -t <user>@<host> <script>`
    pub fn invocation(&self, request: &DeployRequest, script: &RemoteScript) -> Invocation {
        Invocation::new(self.program)
            .arg("-t")
            .arg(request.login())
            .arg(script.joined())
    }
}
