//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TcbootError, TcbootResult};

use super::types::{ColorMode, Config};
use super::ConfigWarning;

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "tcboot.toml";

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config PATH`
    Explicit(PathBuf),
    /// `./tcboot.toml` or the user config file
    Discovered(PathBuf),
    /// Nothing found, built-in defaults
    Defaults,
}

/// Configuration plus everything the CLI should tell the user about it
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    pub warnings: Vec<ConfigWarning>,
    /// A discovered file that failed to parse and was ignored
    pub ignored: Option<TcbootError>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TcbootResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| TcbootError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TcbootError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration for one invocation.
///
/// An explicit path must load; discovered files fall back to defaults
/// when broken so a stray file never blocks a deploy.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> TcbootResult<LoadedConfig> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok(LoadedConfig {
            config: with_env_overrides(config),
            source: ConfigSource::Explicit(path.to_path_buf()),
            warnings,
            ignored: None,
        });
    }

    let candidates = [
        Some(cwd.join(PROJECT_CONFIG_FILE)),
        dirs::config_dir().map(|d| d.join("tcboot").join("config.toml")),
    ];

    for candidate in candidates.into_iter().flatten() {
        if !candidate.is_file() {
            continue;
        }
        return Ok(match load_with_warnings(&candidate) {
            Ok((config, warnings)) => LoadedConfig {
                config: with_env_overrides(config),
                source: ConfigSource::Discovered(candidate),
                warnings,
                ignored: None,
            },
            Err(err) => LoadedConfig {
                config: with_env_overrides(Config::default()),
                source: ConfigSource::Defaults,
                warnings: Vec::new(),
                ignored: Some(err),
            },
        });
    }

    Ok(LoadedConfig {
        config: with_env_overrides(Config::default()),
        source: ConfigSource::Defaults,
        warnings: Vec::new(),
        ignored: None,
    })
}

/// Apply environment variable overrides (TCBOOT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    let non_empty = |key: &str| get_env(key).filter(|v| !v.trim().is_empty());

    if let Some(username) = non_empty("TCBOOT_USERNAME") {
        config.remote.username = username;
    }

    if let Some(destination) = non_empty("TCBOOT_DESTINATION") {
        config.remote.destination = destination;
    }

    if let Some(ssh) = non_empty("TCBOOT_SSH") {
        config.tools.ssh = ssh;
    }

    if let Some(scp) = non_empty("TCBOOT_SCP") {
        config.tools.scp = scp;
    }

    // TCBOOT_COLOR (auto | always | never); unknown values are ignored
    if let Some(mode) = non_empty("TCBOOT_COLOR").and_then(|v| ColorMode::parse(&v)) {
        config.output.color = mode;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "remote",
        "username",
        "destination",
        "group",
        "doas_conf",
        "control_exe",
        "tools",
        "ssh",
        "scp",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
