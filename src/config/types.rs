//! Configuration types

use std::path::Path;

use serde::Deserialize;

use super::loader;
use super::ConfigWarning;
use crate::error::TcbootResult;

/// Default SSH user on a fresh TcBSD image
pub const DEFAULT_USERNAME: &str = "Administrator";

/// Boot folder location read by the TwinCAT runtime on startup
pub const DEFAULT_DESTINATION: &str = "/usr/local/etc/TwinCAT/3.1/Boot";

/// Remote target layout
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteConfig {
    /// SSH user, also the owner of the destination directory
    #[serde(default = "default_username")]
    pub username: String,

    /// Final location of the boot folder on the device
    #[serde(default = "default_destination")]
    pub destination: String,

    /// Group the destination directory must belong to
    #[serde(default = "default_group")]
    pub group: String,

    /// doas rule file on the device
    #[serde(default = "default_doas_conf")]
    pub doas_conf: String,

    /// TwinCAT system service executable
    #[serde(default = "default_control_exe")]
    pub control_exe: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            destination: default_destination(),
            group: default_group(),
            doas_conf: default_doas_conf(),
            control_exe: default_control_exe(),
        }
    }
}

/// Local executables used for the transfer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_ssh")]
    pub ssh: String,

    #[serde(default = "default_scp")]
    pub scp: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            ssh: default_ssh(),
            scp: default_scp(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TcbootResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TcbootResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (TCBOOT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}

fn default_true() -> bool {
    true
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

fn default_destination() -> String {
    DEFAULT_DESTINATION.to_string()
}

fn default_group() -> String {
    "wheel".to_string()
}

fn default_doas_conf() -> String {
    "/usr/local/etc/doas.conf".to_string()
}

fn default_control_exe() -> String {
    "TcSysExe.exe".to_string()
}

fn default_ssh() -> String {
    "ssh".to_string()
}

fn default_scp() -> String {
    "scp".to_string()
}
