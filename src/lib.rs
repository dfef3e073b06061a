//! tcboot - deploy a TwinCAT boot folder to TcBSD over SSH
//!
//! Uploads the boot folder with `scp`, provisions the destination directory
//! on the device, moves the files into place and optionally restarts the
//! TwinCAT runtime. SSH itself is delegated to the OpenSSH executables.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployOutcome, DeployUseCase};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{BootSource, DeployRequest};
pub use domain::ports::{CommandRunner, DeployEvent, DeployEventSink, DeployStage};
pub use domain::services::{shell_quote, shell_word, RemoteScript, RemoteStep, ScriptParams, StepKind};
pub use error::{TcbootError, TcbootResult};
