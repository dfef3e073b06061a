//! Remote Transfer
//!
//! Thin wrappers around the OpenSSH client executables. The SSH protocol,
//! authentication and encryption all stay inside `ssh`/`scp`.

mod scp;
mod ssh;

pub use scp::ScpUpload;
pub use ssh::SshSession;

use crate::config::ToolsConfig;
use crate::domain::ports::CommandRunner;
use crate::error::{TcbootError, TcbootResult};

/// Verify both executables can be run.
///
/// Both are probed before reporting, ssh first.
pub fn check_tools(runner: &dyn CommandRunner, tools: &ToolsConfig) -> TcbootResult<()> {
    let ssh_ok = SshSession::new(&tools.ssh).is_available(runner);
    let scp_ok = ScpUpload::new(&tools.scp).is_available(runner);

    if !ssh_ok {
        return Err(TcbootError::ToolMissing {
            tool: "SSH client".to_string(),
        });
    }
    if !scp_ok {
        return Err(TcbootError::ToolMissing {
            tool: "SCP".to_string(),
        });
    }
    Ok(())
}
