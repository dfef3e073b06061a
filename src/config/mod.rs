//! Configuration module for tcboot
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TCBOOT_*)
//! 3. `--config PATH`, else `./tcboot.toml`, else `~/.config/tcboot/config.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

use std::path::PathBuf;

pub use loader::{resolve, ConfigSource, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{
    ColorMode, Config, OutputConfig, RemoteConfig, ToolsConfig, DEFAULT_DESTINATION,
    DEFAULT_USERNAME,
};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}
