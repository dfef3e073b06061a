//! Deploy request entity

use std::path::PathBuf;

/// Parameters of a single deploy invocation.
///
/// Built once from CLI flags and configuration, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    /// Local boot folder, as given on the command line
    pub source_path: PathBuf,
    /// Device IP or hostname
    pub remote_host: String,
    /// Restart the TwinCAT runtime after copying
    pub restart: bool,
    /// SSH user on the device
    pub username: String,
}

impl DeployRequest {
    pub fn new(
        source_path: impl Into<PathBuf>,
        remote_host: impl Into<String>,
        username: impl Into<String>,
        restart: bool,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            remote_host: remote_host.into(),
            restart,
            username: username.into(),
        }
    }

    /// `user@host`, as understood by ssh
    pub fn login(&self) -> String {
        format!("{}@{}", self.username, self.remote_host)
    }

    /// scp target for the temporary upload (the user's home directory)
    pub fn upload_target(&self) -> String {
        format!("{}:~/", self.login())
    }
}
