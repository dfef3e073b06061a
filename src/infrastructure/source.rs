//! Local boot folder validation

use std::path::Path;

use crate::domain::entities::BootSource;
use crate::error::{TcbootError, TcbootResult};

/// Confirm `path` exists and resolve it to canonical absolute form.
pub fn resolve_source(path: &Path) -> TcbootResult<BootSource> {
    let not_found = || TcbootError::SourceNotFound {
        path: path.to_path_buf(),
    };

    if !path.exists() {
        return Err(not_found());
    }

    let canonical = std::fs::canonicalize(path)?;
    BootSource::from_canonical(canonical).ok_or_else(not_found)
}
