//! Error types for tcboot
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tcboot operations
pub type TcbootResult<T> = Result<T, TcbootError>;

/// Main error type for tcboot operations
#[derive(Error, Debug)]
pub enum TcbootError {
    /// A required local executable could not be run
    #[error("{tool} not found. Install OpenSSH.")]
    ToolMissing { tool: String },

    /// The boot folder to deploy does not exist
    #[error("'{path}' not found")]
    SourceNotFound { path: PathBuf },

    /// scp exited with a non-zero status
    #[error("SCP failed ({})", display_code(.code))]
    CopyFailed { code: Option<i32> },

    /// The composed remote command chain exited with a non-zero status
    #[error("Remote step failed (exit {})", display_code(.code))]
    RemoteFailed { code: Option<i32> },

    /// A subprocess could not be spawned at all
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid or unreadable configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TcbootError {
    /// Process exit status for this failure.
    ///
    /// Every deploy failure maps to 1; interrupts (130) never reach here.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Whether the usage examples should follow the error message.
    pub fn wants_usage(&self) -> bool {
        matches!(self, TcbootError::SourceNotFound { .. })
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}
