//! SCP Upload
//!
//! Uploads the boot folder to the device's home directory with `scp -r`.

use std::path::Path;

use crate::domain::entities::DeployRequest;
use crate::domain::ports::{CommandRunner, Invocation, StdioMode};

/// `scp` wrapper
pub struct ScpUpload<'a> {
    program: &'a str,
}

impl<'a> ScpUpload<'a> {
    pub fn new(program: &'a str) -> Self {
        Self { program }
    }

    /// Check if scp is installed and runnable.
    ///
    /// `scp -h` is not a valid option; OpenSSH prints usage and exits 1.
    pub fn is_available(&self, runner: &dyn CommandRunner) -> bool {
        let probe = Invocation::new(self.program).arg("-h");
        matches!(
            runner.run(&probe, StdioMode::Captured).map(|o| o.code),
            Ok(Some(0)) | Ok(Some(1))
        )
    }

    /// `scp -r <source> <user>@<host>:~/`
    pub fn invocation(&self, source: &Path, request: &DeployRequest) -> Invocation {
        Invocation::new(self.program)
            .arg("-r")
            .arg(source.display().to_string())
            .arg(request.upload_target())
    }
}
