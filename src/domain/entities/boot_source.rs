//! Validated local boot folder

use std::path::{Path, PathBuf};

/// A boot folder that exists locally, in canonical absolute form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootSource {
    path: PathBuf,
    folder_name: String,
}

impl BootSource {
    /// Build from an already canonical path.
    ///
    /// Returns `None` when the path has no final segment (e.g. `/`).
    pub fn from_canonical(path: PathBuf) -> Option<Self> {
        let folder_name = path.file_name()?.to_string_lossy().into_owned();
        Some(Self { path, folder_name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory name the upload lands under in the remote home
    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }
}
