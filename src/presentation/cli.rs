//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - One flat command; there are no subcommands
//! - `--username` has no clap default so config and `TCBOOT_USERNAME`
//!   can supply one; the final fallback is `Administrator`

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Usage examples shown after `--help` and after a missing source path.
pub const USAGE_EXAMPLES: &str = "\
Examples:
  tcboot --source-path 'C:\\Path\\To\\TwinCAT OS (x64)' --remote-host 192.168.1.100
  tcboot --source-path '/path/to/Boot' --remote-host 192.168.1.100 --restart
  tcboot --source-path './xyz' --remote-host tcbsd.local --username myuser --restart";

/// tcboot - copy a TwinCAT boot folder to TcBSD over SSH
#[derive(Parser, Debug)]
#[command(name = "tcboot")]
#[command(author, version, about, long_about = None)]
#[command(after_help = USAGE_EXAMPLES)]
pub struct Cli {
    /// Source folder (e.g., "Boot")
    #[arg(long, value_name = "PATH")]
    pub source_path: PathBuf,

    /// Remote host IP or name
    #[arg(long, value_name = "HOST")]
    pub remote_host: String,

    /// Restart TwinCAT after copy
    #[arg(long)]
    pub restart: bool,

    /// SSH user (default: Administrator)
    #[arg(long)]
    pub username: Option<String>,

    /// Validate and print the scp/ssh commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Config file (default: ./tcboot.toml, then ~/.config/tcboot/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
